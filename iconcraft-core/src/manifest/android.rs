use super::ManifestError;
use std::path::{Path, PathBuf};

pub const ANYDPI_FOLDER: &str = "mipmap-anydpi-v26";
pub const VALUES_FOLDER: &str = "values";

pub const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/ic_launcher_background"/>
    <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>"#;

/// The adaptive icon background is always white; it is not sampled from the
/// source image.
pub const COLORS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="ic_launcher_background">#FFFFFF</color>
</resources>"#;

/// Resource files as `(folder, filename, contents)`.
const RESOURCES: [(&str, &str, &str); 3] = [
    (ANYDPI_FOLDER, "ic_launcher.xml", ADAPTIVE_ICON_XML),
    (ANYDPI_FOLDER, "ic_launcher_round.xml", ADAPTIVE_ICON_XML),
    (VALUES_FOLDER, "colors.xml", COLORS_XML),
];

pub fn paths(output_dir: &Path) -> Vec<PathBuf> {
    RESOURCES
        .iter()
        .map(|(folder, filename, _)| output_dir.join(folder).join(filename))
        .collect()
}

/// Writes the adaptive icon resources. The content is the same for every
/// input image.
pub fn write(output_dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let mut written = Vec::with_capacity(RESOURCES.len());
    for (folder, filename, contents) in RESOURCES {
        let dir = output_dir.join(folder);
        super::create_dir(&dir)?;
        written.push(super::write_file(dir.join(filename), contents)?);
    }
    Ok(written)
}
