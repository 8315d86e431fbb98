use std::env;
use std::error::Error;
use std::path::Path;

use bevy::prelude::*;

use constants::image_formats::ACCEPTED_IMAGE_EXTENSIONS;
use dither_core::PixelBuffer;

/// The currently projected image, delivered atomically per successful decode.
/// `buffer` stays `None` until the first drop succeeds.
#[derive(Resource, Default)]
pub struct SourceImage {
    pub buffer: Option<PixelBuffer>,
    pub name: String,
}

/// Optional CLI image path, decoded at startup.
pub fn load_startup_image(source: &mut SourceImage) {
    let Some(path) = env::args().nth(1) else {
        return;
    };
    load_image(Path::new(&path), source);
}

/// Accept files dropped onto the window; anything without a recognized image
/// extension is ignored with a log line.
pub fn handle_dropped_files(
    mut events: EventReader<FileDragAndDrop>,
    mut source: ResMut<SourceImage>,
) {
    for event in events.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = event else {
            continue;
        };

        let extension = path_buf
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        let accepted = extension
            .as_deref()
            .is_some_and(|ext| ACCEPTED_IMAGE_EXTENSIONS.contains(&ext));
        if !accepted {
            eprintln!(
                "Ignoring dropped file {:?}: accepted extensions are {:?}",
                path_buf, ACCEPTED_IMAGE_EXTENSIONS
            );
            continue;
        }

        load_image(path_buf, &mut source);
    }
}

fn load_image(path: &Path, source: &mut SourceImage) {
    match decode_image(path) {
        Ok(buffer) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!(
                "Loaded image {} ({}x{})",
                name,
                buffer.width(),
                buffer.height()
            );
            source.buffer = Some(buffer);
            source.name = name;
        }
        Err(err) => {
            eprintln!("Failed to decode {:?}: {}", path, err);
        }
    }
}

fn decode_image(path: &Path) -> Result<PixelBuffer, Box<dyn Error>> {
    let decoded = image::open(path)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(PixelBuffer::new(
        width as usize,
        height as usize,
        decoded.into_raw(),
    ))
}
