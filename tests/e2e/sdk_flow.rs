//! Full caller flow: sign in, upload, then draft the storage payment.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::harness::{MockStorageNode, TEST_HASH};
use internet15_sdk::{
    Environment, FileBlob, PaymentState, PaymentStub, StaticWallet, WalletConnector,
    WalletPublicKey,
};
use std::sync::Arc;

#[tokio::test]
async fn test_sign_in_upload_and_pay() {
    let node = MockStorageNode::start().await;
    node.accept_uploads(TEST_HASH).await;
    let config = node.config();

    let key = WalletPublicKey::new([5u8; 32]);
    let env = Environment::with_wallet(Arc::new(StaticWallet::new(key).as_phantom()));
    let identifier = WalletConnector::new(env).connect().await.expect("connect");

    let storage = node.client();
    let hash = storage
        .upload(&FileBlob::new("report.pdf", vec![0u8; 1024]).with_mime_type("application/pdf"))
        .await
        .expect("upload");
    let url = storage.resolve(hash.as_str());
    assert!(url.ends_with(&format!("/ipfs/{TEST_HASH}")));

    let intent = PaymentStub::new(&config)
        .build_payment(identifier.as_str(), 0.002)
        .expect("build payment");
    assert_eq!(intent.payer(), &identifier);
    assert_eq!(intent.state(), PaymentState::Drafted);

    // Only the upload reached the network.
    assert_eq!(node.request_count().await, 1);
}
