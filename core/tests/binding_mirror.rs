use thumb_blur_core::{BindingSlot, BlurLevel, MirrorPlan, MirrorSource};

#[test]
fn second_bind_hands_back_the_first() {
    let mut slot = BindingSlot::new();
    let (first_id, previous) = slot.bind("first");
    assert_eq!(previous, None);
    let (second_id, previous) = slot.bind("second");
    assert_eq!(previous, Some("first"));
    assert!(!slot.is_current(first_id));
    assert!(slot.is_current(second_id));
    assert_eq!(slot.current(), Some(&"second"));
}

#[test]
fn unbind_is_a_no_op_when_empty() {
    let mut slot: BindingSlot<&str> = BindingSlot::new();
    assert_eq!(slot.unbind(), None);
    slot.bind("input");
    assert_eq!(slot.unbind(), Some("input"));
    assert!(!slot.is_bound());
    assert_eq!(slot.unbind(), None);
}

#[test]
fn external_change_overwrites_the_panel_only() {
    let plan = MirrorPlan::for_change(MirrorSource::External, "3", true);
    assert_eq!(plan.write_panel.as_deref(), Some("3"));
    assert_eq!(plan.write_external, None);
    assert_eq!(plan.apply, BlurLevel::new(3));
}

#[test]
fn panel_change_overwrites_the_external_when_bound() {
    let plan = MirrorPlan::for_change(MirrorSource::Panel, "7", true);
    assert_eq!(plan.write_panel, None);
    assert_eq!(plan.write_external.as_deref(), Some("7"));
    assert_eq!(plan.apply, BlurLevel::new(7));

    let unbound = MirrorPlan::for_change(MirrorSource::Panel, "7", false);
    assert_eq!(unbound.write_external, None);
    assert_eq!(unbound.apply, BlurLevel::new(7));
}

#[test]
fn every_slider_value_maps_to_filter_and_class() {
    for value in 0u8..=10 {
        let plan = MirrorPlan::for_change(MirrorSource::Panel, &value.to_string(), false);
        assert_eq!(plan.apply.filter_value(), format!("blur({value}px)"));
        assert_eq!(plan.apply.is_active(), value != 0);
    }
}

#[test]
fn garbage_from_the_host_turns_blur_off() {
    let plan = MirrorPlan::for_change(MirrorSource::External, "", true);
    assert_eq!(plan.apply, BlurLevel::OFF);
    assert_eq!(plan.write_panel.as_deref(), Some("0"));
}
