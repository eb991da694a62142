//! Concurrency tests for the application resource cache

use oe_core::{Config, PathConfig};
use oe_frontend::{FrontendApp, MANIFEST_FILE};
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

fn app_with_resources(temp: &TempDir) -> FrontendApp {
    let root = temp.path().join("resources");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join(MANIFEST_FILE), "icon = app.png\n").unwrap();
    std::fs::write(root.join("app.png"), vec![0xABu8; 4096]).unwrap();

    FrontendApp::new(Config {
        paths: PathConfig::rooted_at(temp.path()),
        ..Config::default()
    })
}

#[test]
fn test_concurrent_first_access_shares_one_cache() {
    const THREADS: usize = 32;

    let temp = TempDir::new().unwrap();
    let app = Arc::new(app_with_resources(&temp));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let app = Arc::clone(&app);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                app.resource_cache() as *const _ as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected = app.resource_cache() as *const _ as usize;
    assert!(addresses.iter().all(|&a| a == expected));
}

#[test]
fn test_concurrent_asset_loads_share_data() {
    const THREADS: usize = 8;

    let temp = TempDir::new().unwrap();
    let app = Arc::new(app_with_resources(&temp));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let app = Arc::clone(&app);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                app.resource_cache().asset("icon").unwrap()
            })
        })
        .collect();

    let loaded: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(loaded.iter().all(|data| data.len() == 4096));

    let cached = app.resource_cache().asset("icon").unwrap();
    assert_eq!(app.resource_cache().cached_len(), 1);
    assert!(loaded.iter().any(|data| Arc::ptr_eq(data, &cached)));
}
