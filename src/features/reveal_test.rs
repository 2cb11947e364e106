use super::*;

// The JS libraries read these objects by camelCase key, so the serialized
// shape is part of the contract.

#[test]
fn aos_options_serialize_with_camel_case_keys() {
    let options = AosOptions {
        duration: 1000,
        easing: "ease-out-quart",
        once: true,
        offset: 30,
        mirror: false,
        anchor_placement: "top-bottom",
    };
    let value = serde_json::to_value(&options).unwrap();
    assert_eq!(value["anchorPlacement"], "top-bottom");
    assert_eq!(value["duration"], 1000);
    assert_eq!(value["once"], true);
    assert_eq!(value["mirror"], false);
}

#[test]
fn tween_vars_omit_unset_fields() {
    let vars = TweenVars {
        x: None,
        y: Some(30.0),
        opacity: 0.0,
        duration: 1.2,
        delay: None,
        stagger: Some(0.15),
        ease: "power2.out",
        filter: "blur(10px)",
        clear_props: Some("all"),
    };
    let value = serde_json::to_value(&vars).unwrap();
    assert!(value.get("x").is_none());
    assert!(value.get("delay").is_none());
    assert_eq!(value["y"], 30.0);
    assert_eq!(value["clearProps"], "all");
}

#[test]
fn tween_vars_without_clear_props_leave_it_out() {
    let vars = TweenVars {
        x: Some(50.0),
        y: None,
        opacity: 0.0,
        duration: 1.5,
        delay: Some(0.3),
        stagger: None,
        ease: "expo.out",
        filter: "blur(5px)",
        clear_props: None,
    };
    let value = serde_json::to_value(&vars).unwrap();
    assert!(value.get("clearProps").is_none());
    assert_eq!(value["delay"], 0.3);
    assert_eq!(value["filter"], "blur(5px)");
}
