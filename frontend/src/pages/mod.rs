pub mod landing;
pub mod legal;
