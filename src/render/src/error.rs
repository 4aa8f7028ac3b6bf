use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
	#[error("cannot draw into a {0}x{1} canvas")]
	EmptyCanvas(u32, u32),
	#[error("failed to encode image: {0}")]
	Image(#[from] image::ImageError),
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
