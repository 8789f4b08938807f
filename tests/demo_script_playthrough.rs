// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vignette-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vignette and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end: load the bundled demo script, drive a session through every message headlessly,
//! and check the event stream the host would see.

use vignette::engine::{Engine, EngineEvent};
use vignette::model::AvatarRef;
use vignette::script::load_script;

#[test]
fn demo_script_plays_through_to_session_close() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/demo-script.json");
    let script = load_script(path).expect("demo script loads");
    assert_eq!(script.script_id(), "DEMO");
    let message_count = script.messages().len();
    assert!(message_count >= 2);

    let mut engine = Engine::open(script, Box::new(|line: &str| line.chars().count() <= 28));

    let mut events = engine.drain_events();
    let mut guard = 0;
    while engine.is_open() {
        if engine.reveal().is_complete() {
            engine.advance();
        } else {
            engine.tick();
        }
        events.extend(engine.drain_events());

        guard += 1;
        assert!(guard < 100_000, "session did not terminate");
    }

    // The session ends exactly once, as the last event.
    let closes = events.iter().filter(|e| matches!(e, EngineEvent::SessionClosed)).count();
    assert_eq!(closes, 1);
    assert_eq!(events.last(), Some(&EngineEvent::SessionClosed));

    // Every text segment announced its chunk count before any of its reveals.
    assert!(matches!(events.first(), Some(EngineEvent::AvatarChanged(_) | EngineEvent::TotalChunks(_))));

    // The demo's avatar swaps all resolved to real variants, never the placeholder.
    let avatars: Vec<&AvatarRef> = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::AvatarChanged(avatar) => Some(avatar),
            _ => None,
        })
        .collect();
    assert!(!avatars.is_empty());
    assert!(avatars.iter().all(|avatar| !avatar.is_placeholder()));

    // Each completed chunk was fully revealed at completion time: completions match chunk counts.
    let completions =
        events.iter().filter(|e| matches!(e, EngineEvent::ChunkRevealComplete)).count();
    let announced: usize = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::TotalChunks(total) => Some(*total),
            _ => None,
        })
        .sum();
    assert_eq!(completions, announced);
}
