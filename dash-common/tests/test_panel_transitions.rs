//! Exhaustive checks of the panel state machine over short operation sequences.

use dash_common::{
    ControlVisibility, DrawerState, PanelConfig, PanelLayout, PanelStateStore, ViewportClassifier,
    ViewportTransition,
};

#[derive(Debug, Clone, Copy)]
enum Op {
    Viewport(bool),
    Collapse(bool),
    SetMobileOpen(bool),
}

const OPS: [Op; 6] = [
    Op::Viewport(true),
    Op::Viewport(false),
    Op::Collapse(true),
    Op::Collapse(false),
    Op::SetMobileOpen(true),
    Op::SetMobileOpen(false),
];

const MAX_LEN: usize = 5;

/// Every sequence of `OPS` up to `MAX_LEN` long
fn all_sequences() -> Vec<Vec<Op>> {
    let mut out = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..MAX_LEN {
        let mut next = Vec::new();
        for seq in &frontier {
            for op in OPS {
                let mut extended: Vec<Op> = seq.clone();
                extended.push(op);
                next.push(extended);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

#[test]
fn test_transition_properties_hold_for_all_sequences() {
    for seq in all_sequences() {
        let mut store = PanelStateStore::new();
        for op in &seq {
            let before = store.state();
            match *op {
                Op::Viewport(is_mobile) => {
                    let transition = store.apply_viewport(is_mobile);
                    let after = store.state();
                    assert_eq!(after.is_mobile, is_mobile, "{seq:?}");
                    match transition {
                        Some(ViewportTransition::EnteredMobile) => {
                            assert!(!after.mobile_open, "{seq:?}");
                            assert!(after.collapsed, "{seq:?}");
                        }
                        Some(ViewportTransition::EnteredDesktop) => {
                            assert!(!after.mobile_open, "{seq:?}");
                            assert_eq!(after.collapsed, before.collapsed, "{seq:?}");
                        }
                        None => assert_eq!(after, before, "{seq:?}"),
                    }
                }
                Op::Collapse(collapsed) => {
                    store.collapse(collapsed);
                    let after = store.state();
                    if before.is_mobile {
                        assert_eq!(after, before, "{seq:?}");
                    } else {
                        assert_eq!(after.collapsed, collapsed, "{seq:?}");
                        assert_eq!(after.mobile_open, before.mobile_open, "{seq:?}");
                    }
                }
                Op::SetMobileOpen(open) => {
                    store.set_mobile_open(open);
                    let once = store.state();
                    store.set_mobile_open(open);
                    assert_eq!(store.state(), once, "{seq:?}");
                    assert_eq!(once.collapsed, before.collapsed, "{seq:?}");
                }
            }
            // The drawer can only be open in mobile mode
            assert!(!store.state().mobile_open || store.state().is_mobile, "{seq:?}");
        }
    }
}

#[test]
fn test_collapsing_rail_never_touches_drawer() {
    let config = PanelConfig::default();
    let mut store = PanelStateStore::new();
    for collapsed in [true, false, true] {
        store.collapse(collapsed);
        let layout = PanelLayout::resolve(&store.state(), &config);
        assert_eq!(layout.drawer_state(), None);
        assert!(!store.state().mobile_open);
    }
}

#[test]
fn test_narrowing_then_overlay_dismiss_scenario() {
    let config = PanelConfig::default();
    let mut classifier = ViewportClassifier::new(config.breakpoint_px);
    let mut store = PanelStateStore::new();

    // Mounted on a wide viewport
    if let Some(is_mobile) = classifier.observe(1280.0) {
        store.apply_viewport(is_mobile);
    }
    assert!(!store.state().is_mobile);
    assert_eq!(
        PanelLayout::resolve(&store.state(), &config),
        PanelLayout::Rail {
            width_px: config.rail_width_px,
            compact: false,
        }
    );

    // Narrowed below the breakpoint, with a redundant resize in between
    for width in [700.0, 640.0] {
        if let Some(is_mobile) = classifier.observe(width) {
            store.apply_viewport(is_mobile);
        }
    }
    let state = store.state();
    assert!(state.is_mobile);
    assert!(!state.mobile_open);
    assert!(state.collapsed);
    assert!(ControlVisibility::of(&state).trigger);
    assert!(!ControlVisibility::of(&state).overlay);

    // Trigger opens the drawer
    store.set_mobile_open(true);
    let state = store.state();
    assert_eq!(
        PanelLayout::resolve(&state, &config).drawer_state(),
        Some(DrawerState::Open)
    );
    assert!(ControlVisibility::of(&state).overlay);

    // Overlay click closes it
    store.set_mobile_open(false);
    let state = store.state();
    assert!(!state.mobile_open);
    assert_eq!(
        PanelLayout::resolve(&state, &config).drawer_state(),
        Some(DrawerState::Closed)
    );
    assert!(!ControlVisibility::of(&state).overlay);
}
