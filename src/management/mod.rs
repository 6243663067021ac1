mod auth;
mod screen;

pub use auth::CredentialProvider;
pub use auth::Credentials;
pub use auth::StaticCredentials;
pub use auth::TokenManager;
pub use screen::Completion;
pub use screen::Screen;
pub use screen::ScreenState;
pub use screen::SharedScreen;
pub use screen::FetchTicket;
pub use screen::SubmitTicket;
pub use screen::refresh;
