use std::time::Duration;

use tokio::time::timeout;

use crate::events::AppEvent;
use crate::io::forward_lines;

#[tokio::test]
async fn test_sync_thread_feeds_async_receiver() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let tx = tx.to_sync();

    let reader = std::thread::spawn(move || {
        tracing::debug!("Reader thread: forwarding lines");
        forward_lines("look forward\n".as_bytes(), &tx);
    });

    let first = timeout(Duration::from_secs(2), rx.recv()).await;
    match first {
        Ok(Ok(AppEvent::TextInput(text))) => assert_eq!(text, "look forward"),
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - line never arrived"),
    }

    let second = timeout(Duration::from_secs(2), rx.recv()).await;
    assert!(matches!(second, Ok(Ok(AppEvent::EndOfInput))));

    reader.join().expect("reader thread panicked");
}

#[tokio::test]
async fn test_many_lines_keep_order() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    let tx = tx.to_sync();

    let input: String = (0..100).map(|i| format!("line{}\n", i)).collect();
    std::thread::spawn(move || forward_lines(input.as_bytes(), &tx));

    let result = timeout(Duration::from_secs(2), async {
        for i in 0..100 {
            match rx.recv().await.expect("recv failed") {
                AppEvent::TextInput(text) => assert_eq!(text, format!("line{}", i)),
                other => panic!("unexpected event: {:?}", other),
            }
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for lines!");
}
