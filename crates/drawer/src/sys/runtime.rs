use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use std::time::Duration;
use tokio::runtime::Runtime;

pub fn start_background_services(tx: Sender<AppEvent>, frame_interval: Duration) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::server::run_server(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    run_frame_ticker(tx, frame_interval).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}

async fn run_frame_ticker(tx: Sender<AppEvent>, frame_interval: Duration) {
    let mut interval = tokio::time::interval(frame_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).await.is_err() {
            break;
        }
    }
}
