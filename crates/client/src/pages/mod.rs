//! The five screens: login plus the four role dashboards.

pub mod admin;
pub mod editor;
pub mod login;
pub mod reader;
pub mod writer;

pub use admin::AdminPage;
pub use editor::EditorPage;
pub use login::LoginPage;
pub use reader::ReaderPage;
pub use writer::WriterPage;
