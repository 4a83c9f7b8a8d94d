//! Output generation: rendering and file emission.
//!
//! # Submodules
//!
//! - [`render`]: format-independent article walk producing the document text
//! - [`html`] / [`markdown`]: the markup tokens the walk emits
//! - [`files`]: file name derivation and save/delete
//! - [`json`]: JSON dump of the scraped records
//!
//! # Output structure
//!
//! ```text
//! output_dir/
//! ├── novo_jogo_anunciado.html   # one file per article, stem from the title
//! └── outro_titulo.html
//!
//! json_output_dir/               # optional, when --json-output-dir is set
//! └── articles.json
//! ```

pub mod files;
pub mod html;
pub mod json;
pub mod markdown;
pub mod render;
