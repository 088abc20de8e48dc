//! Cross-crate flows.
//!
//! Each flow starts from a review draft, signs it with a local wallet,
//! stores it, then reads it back and verifies it the way a review page does.

pub mod http_flow;
pub mod sign_and_verify;

use rs_01_review_signing::{
    InMemoryReviewStore, LocalKeyWallet, ReviewSigner, ReviewSigningApi, ReviewSubmission,
};
use std::sync::Arc;

/// A submission pipeline with a connected local wallet.
pub async fn connected_submission(
    wallet: LocalKeyWallet,
) -> ReviewSubmission<LocalKeyWallet, InMemoryReviewStore> {
    let signer = Arc::new(ReviewSigner::new(wallet));
    signer
        .connect_wallet()
        .await
        .expect("local wallet always has an account");
    ReviewSubmission::new(signer, Arc::new(InMemoryReviewStore::new()))
}
