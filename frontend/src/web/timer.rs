//! 定时器
//!
//! 基于 `gloo-timers` 的 `setTimeout` future 实现核心库的 `Pause`。

use campus_match::Pause;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

#[derive(Clone, Copy, Default)]
pub struct TimerPause;

#[async_trait::async_trait(?Send)]
impl Pause for TimerPause {
    async fn pause(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
