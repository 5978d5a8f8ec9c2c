//! Pusher websocket client for subscription notifications.
//!
//! The dashboard opens one `ChannelSubscription` while it is mounted. The
//! connection reconnects with exponential backoff until `close` is called or
//! Pusher reports an error that reconnecting cannot fix.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]`; on the
//! server `subscribe` returns an inert handle.

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use super::pusher::SubscriptionNotice;

#[cfg(feature = "hydrate")]
enum Outbound {
    Text(String),
    Close,
}

/// Live subscription handle. Dropping it does not close the socket; call
/// `close` from the owner's cleanup.
pub struct ChannelSubscription {
    #[cfg(feature = "hydrate")]
    alive: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    channel: String,
    #[cfg(feature = "hydrate")]
    outbound: futures::channel::mpsc::UnboundedSender<Outbound>,
}

impl ChannelSubscription {
    /// Unsubscribe, close the socket, and stop reconnecting.
    pub fn close(&self) {
        #[cfg(feature = "hydrate")]
        {
            if !self.alive.swap(false, Ordering::Relaxed) {
                return;
            }
            let _ = self
                .outbound
                .unbounded_send(Outbound::Text(super::pusher::unsubscribe_message(&self.channel)));
            let _ = self.outbound.unbounded_send(Outbound::Close);
        }
    }
}

/// Connect to Pusher and invoke `on_notice` for every `new-subscription`
/// event published on `channel`.
pub fn subscribe<F>(key: &str, cluster: &str, channel: &str, on_notice: F) -> ChannelSubscription
where
    F: Fn(SubscriptionNotice) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let (tx, rx) = futures::channel::mpsc::unbounded::<Outbound>();
        let alive = Arc::new(AtomicBool::new(true));
        let url = super::pusher::socket_url(key, cluster);
        leptos::task::spawn_local(subscription_loop(
            url,
            channel.to_owned(),
            alive.clone(),
            tx.clone(),
            rx,
            std::rc::Rc::new(on_notice),
        ));
        ChannelSubscription { alive, channel: channel.to_owned(), outbound: tx }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, cluster, channel, on_notice);
        ChannelSubscription {}
    }
}

/// Connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn subscription_loop(
    url: String,
    channel: String,
    alive: Arc<AtomicBool>,
    tx: futures::channel::mpsc::UnboundedSender<Outbound>,
    rx: futures::channel::mpsc::UnboundedReceiver<Outbound>,
    on_notice: std::rc::Rc<dyn Fn(SubscriptionNotice)>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    while alive.load(Ordering::Relaxed) {
        match connect_and_run(&url, &channel, &alive, &tx, &rx, on_notice.as_ref()).await {
            Ok(()) => leptos::logging::log!("pusher disconnected"),
            Err(e) => leptos::logging::warn!("pusher error: {e}"),
        }
        if !alive.load(Ordering::Relaxed) {
            break;
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect, subscribe, and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    channel: &str,
    alive: &AtomicBool,
    tx: &futures::channel::mpsc::UnboundedSender<Outbound>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<Outbound>>>,
    on_notice: &dyn Fn(SubscriptionNotice),
) -> Result<(), String> {
    use std::cell::Cell;

    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    use super::pusher::{self, ServerMessage};

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    let activity_timeout = Cell::new(None::<u64>);

    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            match msg {
                Outbound::Text(text) => {
                    if ws_write.send(Message::Text(text)).await.is_err() {
                        break;
                    }
                }
                Outbound::Close => {
                    let _ = ws_write.close().await;
                    break;
                }
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            let text = match msg {
                Ok(Message::Text(text)) => text,
                Ok(Message::Bytes(_)) => continue,
                Err(e) => {
                    leptos::logging::warn!("pusher recv error: {e}");
                    break;
                }
            };
            let message = match pusher::parse_server_message(&text) {
                Ok(message) => message,
                Err(e) => {
                    leptos::logging::warn!("{e}");
                    continue;
                }
            };
            match &message {
                ServerMessage::ConnectionEstablished { socket_id, activity_timeout: timeout } => {
                    leptos::logging::log!("pusher connected: {socket_id}");
                    activity_timeout.set(*timeout);
                    let _ = tx.unbounded_send(Outbound::Text(pusher::subscribe_message(channel)));
                }
                ServerMessage::SubscriptionSucceeded { channel } => {
                    leptos::logging::log!("pusher subscribed: {channel}");
                }
                ServerMessage::Ping => {
                    let _ = tx.unbounded_send(Outbound::Text(pusher::pong_message()));
                }
                ServerMessage::Error { code, message } => {
                    leptos::logging::warn!("pusher:error {code:?}: {message}");
                    if !pusher::should_reconnect(*code) {
                        alive.store(false, Ordering::Relaxed);
                        break;
                    }
                }
                _ => {
                    if let Some(notice) = pusher::subscription_notice(&message, channel)
                        && alive.load(Ordering::Relaxed)
                    {
                        on_notice(notice);
                    }
                }
            }
        }
    };

    // Ping when the server has been quiet for its advertised activity timeout.
    let keepalive_task = async {
        loop {
            let secs = activity_timeout.get().unwrap_or(120);
            gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
            if tx.unbounded_send(Outbound::Text(pusher::ping_message())).is_err() {
                break;
            }
        }
    };

    futures::future::select(
        Box::pin(send_task),
        Box::pin(futures::future::select(Box::pin(recv_task), Box::pin(keepalive_task))),
    )
    .await;

    Ok(())
}
