//! Async driver — runs composer effects against the backend and the host.

use super::composer::{Composer, Effect};
use super::host::{HostPlatform, WalletConnector};
use crate::auth::{CreatedUserWallet, SignInProof};
use crate::domain::pair::{Pair, PairDetail};
use crate::domain::position::Position;
use crate::error::SdkError;
use crate::shared::PairAddress;

/// Remote data operations the composer depends on.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn trending(&self) -> Result<Vec<Pair>, SdkError>;

    async fn search(&self, term: &str) -> Result<Vec<Pair>, SdkError>;

    async fn detail(&self, address: &PairAddress) -> Result<PairDetail, SdkError>;

    async fn positions(&self) -> Result<Vec<Position>, SdkError>;

    /// Never fails; an unreachable backend reads as "unknown identity".
    async fn identity_exists(&self, address: &str) -> bool;

    async fn sign_up(&self, proof: &SignInProof) -> Result<CreatedUserWallet, SdkError>;

    async fn log_in(&self, proof: &SignInProof) -> Result<(), SdkError>;

    /// Drop any identity remembered for the session.
    async fn forget_identity(&self) {}
}

#[cfg(feature = "http")]
impl Backend for crate::client::TerminalxClient {
    async fn trending(&self) -> Result<Vec<Pair>, SdkError> {
        self.pairs().trending().await
    }

    async fn search(&self, term: &str) -> Result<Vec<Pair>, SdkError> {
        self.pairs().search(term).await
    }

    async fn detail(&self, address: &PairAddress) -> Result<PairDetail, SdkError> {
        self.pairs().detail(address.as_str()).await
    }

    async fn positions(&self) -> Result<Vec<Position>, SdkError> {
        self.positions().list().await
    }

    async fn identity_exists(&self, address: &str) -> bool {
        self.auth().identity_exists(address).await
    }

    async fn sign_up(&self, proof: &SignInProof) -> Result<CreatedUserWallet, SdkError> {
        self.auth().sign_up(proof).await
    }

    async fn log_in(&self, proof: &SignInProof) -> Result<(), SdkError> {
        self.auth().log_in(proof).await.map(|_| ())
    }

    async fn forget_identity(&self) {
        self.auth().forget().await;
    }
}

/// The mini app: a [`Composer`] wired to its collaborators.
///
/// Effects run one at a time in the order they were produced, and `dispatch`
/// holds `&mut self` until the last one settles. Through `App` a response can
/// therefore never arrive after a newer action. Embedders that need fetches
/// in flight while the user keeps acting should drive [`Composer`] directly:
/// spawn each [`Effect`] themselves and hand results back through the
/// `Composer::apply_*` methods, whose tickets drop stale responses.
pub struct App<B, H, W> {
    composer: Composer,
    backend: B,
    host: H,
    wallet: W,
}

impl<B: Backend, H: HostPlatform, W: WalletConnector> App<B, H, W> {
    pub fn new(backend: B, host: H, wallet: W) -> Self {
        Self {
            composer: Composer::new(),
            backend,
            host,
            wallet,
        }
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub async fn mount(&mut self) {
        self.dispatch(Composer::mount).await;
    }

    /// Apply a composer action and run every effect it produces.
    ///
    /// ```ignore
    /// app.dispatch(|c| c.select_row(0)).await;
    /// ```
    pub async fn dispatch<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Composer) -> Vec<Effect>,
    {
        let effects = action(&mut self.composer);
        self.run(effects).await;
    }

    /// Apply a composer action that has no effects (timers, modal toggles).
    pub fn update<F, T>(&mut self, action: F) -> T
    where
        F: FnOnce(&mut Composer) -> T,
    {
        action(&mut self.composer)
    }

    async fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.execute(effect).await;
        }
    }

    async fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Host(command) => self.host.apply(&command),
            Effect::WriteClipboard(text) => {
                if let Err(e) = self.host.write_clipboard(&text) {
                    tracing::warn!(error = %e, "Clipboard write failed");
                }
            }
            Effect::FetchTrending => {
                let result = self.backend.trending().await;
                log_failure("trending", &result);
                self.composer.apply_trending(result);
            }
            Effect::SearchPairs(ticket) => {
                let result = self.backend.search(ticket.key()).await;
                log_failure("search", &result);
                self.composer.apply_search(&ticket, result);
            }
            Effect::FetchDetail(ticket) => {
                let result = self.backend.detail(ticket.key()).await;
                log_failure("detail", &result);
                self.composer.apply_detail(&ticket, result);
            }
            Effect::FetchPositions(ticket) => {
                let result = self.backend.positions().await;
                log_failure("positions", &result);
                self.composer.apply_positions(&ticket, result);
            }
            Effect::CheckIdentity(ticket) => {
                let exists = self.backend.identity_exists(ticket.key()).await;
                self.composer.apply_identity(&ticket, exists);
            }
            Effect::SignUp(ticket, proof) => {
                let result = self.backend.sign_up(&proof).await;
                log_failure("signup", &result);
                self.composer.apply_sign_up(&ticket, result);
            }
            Effect::LogIn(ticket, proof) => {
                let result = self.backend.log_in(&proof).await;
                log_failure("login", &result);
                self.composer.apply_log_in(&ticket, result);
            }
            Effect::DisconnectWallet => {
                let result = self.wallet.disconnect().await;
                self.backend.forget_identity().await;
                self.composer.apply_disconnect(result);
            }
        }
    }
}

fn log_failure<T>(operation: &'static str, result: &Result<T, SdkError>) {
    if let Err(e) = result {
        tracing::error!(operation, kind = ?e.kind(), error = %e, "Request failed");
    }
}
