use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

const FETCH_THREAD_NAME: &str = "lastmile-fetch";

/// Small runtime shared by remote savings fetches
pub static GLOBAL_RUNTIME: Lazy<Arc<Runtime>> = Lazy::new(|| {
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name(FETCH_THREAD_NAME)
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");
    Arc::new(runtime)
});

/// Drive a future to completion from synchronous code
pub fn block_on<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    GLOBAL_RUNTIME.block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_tasks_run_on_fetch_threads() {
        let name = block_on(async {
            tokio::spawn(async { std::thread::current().name().map(String::from) })
                .await
                .unwrap()
        });
        assert_eq!(name.as_deref(), Some(FETCH_THREAD_NAME));
    }

    #[test]
    fn test_timers_are_enabled() {
        let months = block_on(async {
            tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
            6
        });
        assert_eq!(months, 6);
    }
}
