use std::str::FromStr;

use crate::Result;

pub fn get_num_threads() -> usize {
    // Respond to the same environment variable as rayon.
    match std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| usize::from_str(&s).ok())
    {
        Some(x) if x > 0 => x,
        Some(_) | None => num_cpus::get(),
    }
}

/// Builds a dedicated rayon pool to run the kernels on, `None` uses [`get_num_threads`].
pub fn thread_pool(num_threads: Option<usize>) -> Result<rayon::ThreadPool> {
    let num_threads = num_threads.unwrap_or_else(get_num_threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("natten-{i}"))
        .build()?;
    Ok(pool)
}
