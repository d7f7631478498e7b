// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 The Webappify contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use crate::internal::browser::find_in_path;
use crate::types::IconStatus;
use crate::types::local_settings::LocalSettings;
use crate::types::web_app::IconError;
use crate::utils::logger::log_debug;
use std::path::Path;
use std::process::Command;

/// Hicolor rasterization targets, smallest to largest.
pub const ICON_SIZE_LADDER: &[u32] = &[16, 24, 32, 48, 64, 128, 256, 512];

/// ImageMagick entry points, newest first. `convert` is the pre-v7 name.
const CONVERTER_CANDIDATES: &[&str] = &["magick", "convert"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Svg,
    Raster(&'static str),
}

impl ImageKind {
    fn extension(&self) -> &'static str {
        match self {
            ImageKind::Svg => "svg",
            ImageKind::Raster(ext) => ext,
        }
    }
}

/// Sniffs the image type from content, never from the URL.
pub fn detect_image_kind(bytes: &[u8]) -> ImageKind {
    let head = &bytes[..bytes.len().min(512)];

    if head.starts_with(&[0x89, b'P', b'N', b'G']) {
        return ImageKind::Raster("png");
    }
    if head.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return ImageKind::Raster("jpg");
    }
    if head.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        return ImageKind::Raster("ico");
    }

    let text = String::from_utf8_lossy(head);
    let trimmed = text.trim_start();
    if trimmed.starts_with("<?xml") || trimmed.starts_with("<svg") || text.contains("<svg") {
        return ImageKind::Svg;
    }

    // Let the converter sniff anything else
    ImageKind::Raster("png")
}

fn fetch_icon(url: &str) -> Result<Vec<u8>, IconError> {
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(IconError::FetchStatus(response.status()));
    }
    Ok(response.bytes()?.to_vec())
}

/// Installs the untouched download at the largest slot it fits. Used when
/// no converter is available, or when every conversion attempt failed.
fn install_original(
    bytes: &[u8],
    kind: ImageKind,
    id: &str,
    settings: &LocalSettings,
) -> Result<(), IconError> {
    let dest = match kind {
        ImageKind::Svg => settings.scalable_icon_path(id),
        ImageKind::Raster(ext) => settings
            .icons_dir
            .join("512x512")
            .join("apps")
            .join(format!("{id}.{ext}")),
    };

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&dest, bytes)?;
    println!("Installed original icon at {}", dest.display());

    Ok(())
}

fn convert_ladder(
    converter: &Path,
    source: &Path,
    kind: ImageKind,
    id: &str,
    settings: &LocalSettings,
) -> Result<Vec<u32>, IconError> {
    let mut sizes = Vec::new();

    for &size in ICON_SIZE_LADDER {
        let dest = settings.sized_icon_path(size, id);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut command = Command::new(converter);
        if kind == ImageKind::Svg {
            command.arg("-background").arg("none");
        }
        command
            .arg(source)
            .arg("-resize")
            .arg(format!("{size}x{size}"))
            .arg(&dest);
        log_debug(&command, &settings.data_dir);

        match command.status() {
            Ok(status) if status.success() => sizes.push(size),
            Ok(status) => {
                eprintln!("Warning: icon conversion to {size}px failed with status {status}");
            }
            Err(e) => {
                eprintln!("Warning: failed to run image converter: {e}");
            }
        }
    }

    Ok(sizes)
}

/// Fetches the icon and installs the size ladder. Every outcome short of an
/// unwritable filesystem degrades rather than fails: the caller reports
/// `Err` as a warning and generation continues without an icon.
pub fn install_icon(
    icon_url: &str,
    id: &str,
    settings: &LocalSettings,
) -> Result<IconStatus, IconError> {
    let bytes = fetch_icon(icon_url)?;
    let kind = detect_image_kind(&bytes);

    let Some(converter) = find_in_path(CONVERTER_CANDIDATES, &settings.path_var) else {
        eprintln!("Warning: {}", IconError::ConverterUnavailable);
        install_original(&bytes, kind, id, settings)?;
        return Ok(IconStatus::InstalledOriginalOnly);
    };

    std::fs::create_dir_all(&settings.data_dir)?;
    let source = settings
        .data_dir
        .join(format!("{id}-icon-src.{}", kind.extension()));
    std::fs::write(&source, &bytes)?;

    let sizes = convert_ladder(&converter, &source, kind, id, settings);
    let _ = std::fs::remove_file(&source);
    let sizes = sizes?;

    if sizes.is_empty() {
        install_original(&bytes, kind, id, settings)?;
        return Ok(IconStatus::InstalledOriginalOnly);
    }

    Ok(IconStatus::Installed { sizes })
}
