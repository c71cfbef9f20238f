//! Headless model of the translation page
//!
//! The page has two parts: an upload widget that accepts one document, and a
//! controller that sends it to `POST /api/translate` and turns the answer into
//! a download. Both are plain state machines; rendering is left to whoever
//! drives them (the CLI in this crate).
//!
//! # Example
//!
//! ```ignore
//! use lumina_translate::client::{HttpTranslateClient, PageController, SelectedFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpTranslateClient::new("http://127.0.0.1:3000")?;
//!     let mut page = PageController::new();
//!     page.pick_files(vec![SelectedFile::from_path("report.txt".as_ref())?]);
//!     page.submit(&client).await;
//!
//!     if let Some(handle) = page.download_handle() {
//!         handle.save_in(".".as_ref())?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod download;
pub mod file;
pub mod http;
pub mod upload;

pub use controller::{Notice, PageController, TranslationState};
pub use download::{DownloadHandle, DownloadStore};
pub use file::SelectedFile;
pub use http::{ClientError, HttpTranslateClient, PendingRequest, TranslateClient};
pub use upload::{DropOutcome, FileRejection, SelectionChange, UploadWidget, WidgetView};
