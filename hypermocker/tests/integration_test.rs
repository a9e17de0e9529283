use hypermocker::{Bytes, Server, StatusCode};

#[tokio::test]
async fn anticipated_request_is_answered() {
    let _ = env_logger::try_init();

    let server = Server::bind().await;
    let url = format!("{}/foo", server.url());
    let mut anticipated = server.anticipate("/foo").await;

    futures::future::join(
        async {
            let response = reqwest::get(url).await.unwrap();
            let bytes = response.bytes().await.unwrap();
            assert_eq!(&bytes[..], b"hello");
        },
        async {
            let request = anticipated.expect().await;
            assert_eq!(request.uri.path(), "/foo");
            anticipated.respond(Bytes::from_static(b"hello")).await;
        },
    )
    .await;
}

#[tokio::test]
async fn response_can_be_prepared_before_request_comes() {
    let _ = env_logger::try_init();

    let server = Server::bind().await;
    server
        .anticipate("/missing")
        .await
        .respond_with_status(StatusCode::NOT_FOUND)
        .await;

    let response = reqwest::get(format!("{}/missing", server.url()))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[should_panic(expected = "there are unexpected requests")]
async fn unexpected_request() {
    let _ = env_logger::try_init();

    let server = Server::bind().await;
    let url = format!("{}/foo", server.url());

    let response = reqwest::get(url).await.unwrap();
    let bytes = response.bytes().await.unwrap();
    assert_eq!(&bytes[..], b"unexpected");
}
