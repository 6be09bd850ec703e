#![warn(missing_docs)]

//! A crate for editing the `iTXt` metadata of PNG files.
//!
//! The PNG is scanned once into an [`ItxtStore`]. All chunks other than `iTXt`
//! are kept as the exact bytes that were read, the `iTXt` chunks become an
//! editable key/value table, and writing the store back out gives a PNG with
//! freshly encoded `iTXt` chunks.
//!
//! ```no_run
//! use png_itxt::ItxtStore;
//! # fn main() -> png_itxt::ItxtResult<()> {
//! let file = std::fs::File::open("image.png")?;
//! let store = ItxtStore::from_reader(std::io::BufReader::new(file))?;
//! store.set("Comment", "edited");
//! store.write_to(std::fs::File::create("image.png")?)?;
//! # Ok(())
//! # }
//! ```

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod ascii_array;
pub use ascii_array::*;

pub mod int_endian;
pub use int_endian::*;

mod error;
pub use error::*;

pub mod png;
pub use png::ItxtStore;
