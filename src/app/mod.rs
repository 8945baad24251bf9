//! Page composer and its async driver.
//!
//! - [`Composer`]: pure view-state machine (screen, session, search, fetch tickets).
//! - [`App`]: executes composer [`Effect`]s against a [`Backend`], a
//!   [`HostPlatform`] and a [`WalletConnector`].

pub mod composer;
pub mod driver;
pub mod host;
pub mod session;

pub use composer::{Composer, Effect, Notice, NoticeLevel, Screen, SearchBar, Tab};
pub use driver::{App, Backend};
pub use host::{HostCommand, HostPlatform, WalletConnector, HEADER_COLOR};
pub use session::{AuthStatus, Session};
