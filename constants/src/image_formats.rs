/// File extensions accepted by the image drop handler (lowercase).
pub const ACCEPTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];
