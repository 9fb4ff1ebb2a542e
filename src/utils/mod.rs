// texture-downscale/src/utils/mod.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extensions picked up by batch discovery, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Output path for single-file mode.
///
/// An explicit path wins. Otherwise the file lands next to the input as
/// `{stem}_{size}x{size}{ext}`, keeping the extension's original case.
pub fn single_output_path(input_path: &Path, output: Option<&Path>, target_size: u32) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => {
            let mut file_name: OsString = input_path
                .file_stem()
                .map(|stem| stem.to_os_string())
                .unwrap_or_default();
            file_name.push(size_suffix(target_size));

            if let Some(extension) = input_path.extension() {
                file_name.push(".");
                file_name.push(extension);
            }

            input_path.with_file_name(file_name)
        }
    }
}

/// Output directory for batch mode: the explicit one, or
/// `{input_dir}/downscaled_{size}x{size}`.
pub fn batch_output_dir(input_dir: &Path, output: Option<&Path>, target_size: u32) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => input_dir.join(format!("downscaled{}", size_suffix(target_size))),
    }
}

/// Batch outputs keep the input's file name; the directory carries the size.
pub fn batch_output_path(input_path: &Path, output_dir: &Path) -> Option<PathBuf> {
    input_path.file_name().map(|name| output_dir.join(name))
}

pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn size_suffix(target_size: u32) -> String {
    format!("_{}x{}", target_size, target_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_appends_size() {
        assert_eq!(
            single_output_path(Path::new("photo.png"), None, 16),
            PathBuf::from("photo_16x16.png")
        );
        assert_eq!(
            single_output_path(Path::new("icon.png"), None, 32),
            PathBuf::from("icon_32x32.png")
        );
    }

    #[test]
    fn default_name_keeps_extension_case() {
        assert_eq!(
            single_output_path(Path::new("photo.JPG"), None, 16),
            PathBuf::from("photo_16x16.JPG")
        );
    }

    #[test]
    fn default_name_stays_in_input_directory() {
        let input = Path::new("textures").join("blocks").join("stone.png");
        assert_eq!(
            single_output_path(&input, None, 16),
            Path::new("textures").join("blocks").join("stone_16x16.png")
        );
    }

    #[test]
    fn default_name_only_replaces_last_extension() {
        assert_eq!(
            single_output_path(Path::new("sheet.v2.png"), None, 8),
            PathBuf::from("sheet.v2_8x8.png")
        );
    }

    #[test]
    fn default_name_without_extension() {
        assert_eq!(
            single_output_path(Path::new("icon"), None, 16),
            PathBuf::from("icon_16x16")
        );
    }

    #[test]
    fn explicit_output_is_verbatim() {
        let explicit = Path::new("somewhere").join("custom.bmp");
        assert_eq!(
            single_output_path(Path::new("photo.png"), Some(&explicit), 16),
            explicit
        );
    }

    #[test]
    fn batch_dir_defaults_inside_input() {
        assert_eq!(
            batch_output_dir(Path::new("textures"), None, 64),
            Path::new("textures").join("downscaled_64x64")
        );
        assert_eq!(
            batch_output_dir(Path::new("textures"), Some(Path::new("out")), 64),
            PathBuf::from("out")
        );
    }

    #[test]
    fn batch_path_keeps_file_name() {
        assert_eq!(
            batch_output_path(&Path::new("in").join("Grass.PNG"), Path::new("out")),
            Some(Path::new("out").join("Grass.PNG"))
        );
    }

    #[test]
    fn supported_formats_match_case_insensitively() {
        for name in ["a.png", "a.PNG", "a.jpg", "a.JpEg", "a.gif", "a.bmp"] {
            assert!(is_supported_format(Path::new(name)), "{}", name);
        }
        for name in ["a.webp", "a.tiff", "a.txt", "png", ".png", "a"] {
            assert!(!is_supported_format(Path::new(name)), "{}", name);
        }
    }
}
