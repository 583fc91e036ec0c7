use super::*;

fn poll_now<F: std::future::Future>(fut: F) -> std::task::Poll<F::Output> {
    let fut = std::pin::pin!(fut);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    std::future::Future::poll(fut, &mut cx)
}

#[test]
fn load_summary_without_token_skips_backend() {
    let result = poll_now(load_summary(None));
    assert_eq!(result, std::task::Poll::Ready(Err(ApiError::MissingToken)));
}

#[test]
fn missing_token_does_not_trigger_backend_signout() {
    let std::task::Poll::Ready(Err(e)) = poll_now(load_summary(None)) else {
        panic!("expected an immediate error");
    };
    assert!(!e.is_unauthorized());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_summary_with_token_is_unavailable_off_browser() {
    let result = poll_now(load_summary(Some("abc123".to_owned())));
    assert_eq!(result, std::task::Poll::Ready(Err(ApiError::Unavailable)));
}
