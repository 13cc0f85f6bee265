use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::{clear_full_rows, FrameSnapshot, GameEngine, MenuChoice};
use blockfall::input::HeldKeys;
use blockfall::types::{Key, FIXED_STEP_SECS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn engine_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut engine = GameEngine::new(1);
    engine.on_menu_choice(MenuChoice::Play, 6.0);
    let mut snapshot = FrameSnapshot::default();
    let mut held = HeldKeys::new().with_key_release_timeout_ms(0);

    let allocs = with_alloc_counting(|| {
        for i in 0..400 {
            let key = if i % 2 == 0 { Key::Left } else { Key::Right };
            held.press(key);
            let _ = engine.on_key_down(key, false);
            let _ = engine.on_key_down(Key::Rotate, false);

            engine.advance(FIXED_STEP_SECS * 3.0, &held.held());
            if engine.take_last_event().is_some() {
                let _ = clear_full_rows(engine.board());
            }
            engine.snapshot_into(&mut snapshot);

            held.release(key);
            held.end_frame();
        }

        // Restart through the menu.
        let _ = engine.on_key_down(Key::Escape, false);
        let _ = engine.on_key_down(Key::MenuConfirm, false);
        engine.advance(1.0, &[Key::Down]);
    });

    assert_eq!(allocs, 0);
}
