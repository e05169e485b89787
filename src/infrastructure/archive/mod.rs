//! Archive post-processing

mod gzip;

pub use gzip::gzip_in_place;
