//! Tests for the default state trees

#![cfg(test)]

use gltrace_shared::{GlEnum, StateType};

use super::builder::{
    Profile, TEXTURE_UNIT_COUNT, VERTEX_ATTRIB_COUNT, build_empty_root, build_es1_state,
    build_es2_state,
};
use super::error::{ErrorCategory, StateError};
use super::export::changed_values;
use super::path::StatePath;
use super::property::GlProperty;
use super::types::{DisplayRadix, StateValue};

fn leaf_value(state: &GlProperty, path: &str) -> StateValue {
    let path: StatePath = path.parse().unwrap();
    state
        .resolve(&path)
        .unwrap()
        .as_scalar()
        .unwrap_or_else(|| panic!("{path} is not a leaf"))
        .value()
        .clone()
}

fn textures_path() -> StatePath {
    StatePath::new()
        .field(StateType::TextureState)
        .field(StateType::Textures)
}

#[test]
fn test_es2_defaults() {
    let state = build_es2_state().unwrap();
    assert_eq!(state.state_type(), StateType::GlStateEs2);

    let expected = [
        ("TransformationState/DepthRange/DepthRangeNear", StateValue::Float(0.0)),
        ("TransformationState/DepthRange/DepthRangeFar", StateValue::Float(1.0)),
        ("RasterizationState/LineWidth", StateValue::Float(1.0)),
        ("PixelOperations/Dither", StateValue::Boolean(true)),
        ("PixelPacking/PackAlignment", StateValue::Integer(4)),
        ("PixelPacking/UnpackAlignment", StateValue::Integer(4)),
        ("RasterizationState/CullFaceMode", StateValue::Enum(GlEnum::Back)),
        ("RasterizationState/FrontFace", StateValue::Enum(GlEnum::Ccw)),
        ("PixelOperations/DepthFunc", StateValue::Enum(GlEnum::Less)),
        ("PixelOperations/Stencil/StencilFunc", StateValue::Enum(GlEnum::Always)),
        ("PixelOperations/Stencil/StencilBackFail", StateValue::Enum(GlEnum::Keep)),
        ("PixelOperations/Blend/BlendEquationRgb", StateValue::Enum(GlEnum::FuncAdd)),
        (
            "VertexArrayData/VertexAttribArray[0]/VertexAttribArraySize",
            StateValue::Integer(4),
        ),
        (
            "VertexArrayData/VertexAttribArray[0]/VertexAttribArrayType",
            StateValue::Enum(GlEnum::Float),
        ),
        ("TextureState/Textures#0/TextureWidth", StateValue::Integer(-1)),
        (
            "TextureState/Textures#0/TextureFormat",
            StateValue::Enum(GlEnum::InvalidValue),
        ),
        ("TextureState/Textures#0/TextureImage", StateValue::String(None)),
    ];
    for (path, value) in expected {
        assert_eq!(leaf_value(&state, path), value, "default of {path}");
    }
}

#[test]
fn test_es2_cardinalities() {
    let state = build_es2_state().unwrap();

    let attribs: StatePath = "VertexArrayData/VertexAttribArray".parse().unwrap();
    let attribs = state.resolve(&attribs).unwrap().as_list().unwrap();
    assert_eq!(attribs.len(), VERTEX_ATTRIB_COUNT);
    assert_eq!(attribs.len(), 8);

    let bindings: StatePath = "VertexArrayData/BufferBindings/VertexAttribArrayBufferBindings"
        .parse()
        .unwrap();
    assert_eq!(state.resolve(&bindings).unwrap().as_list().unwrap().len(), 8);

    let units: StatePath = "TextureState/TextureUnits".parse().unwrap();
    let units = state.resolve(&units).unwrap().as_list().unwrap();
    assert_eq!(units.len(), TEXTURE_UNIT_COUNT);
    assert_eq!(units.len(), 8);

    let textures = state.resolve(&textures_path()).unwrap().as_sparse().unwrap();
    assert_eq!(textures.handles().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_es2_child_order() {
    let state = build_es2_state().unwrap();
    let children: Vec<StateType> = state
        .as_composite()
        .unwrap()
        .children()
        .iter()
        .map(GlProperty::state_type)
        .collect();
    assert_eq!(
        children,
        vec![
            StateType::VertexArrayData,
            StateType::FramebufferState,
            StateType::TransformationState,
            StateType::RasterizationState,
            StateType::PixelOperations,
            StateType::PixelPacking,
            StateType::TextureState,
            StateType::ProgramState,
            StateType::Shaders,
        ]
    );
}

#[test]
fn test_es2_object_collections_start_empty() {
    let state = build_es2_state().unwrap();
    let programs: StatePath = "ProgramState/Programs".parse().unwrap();
    assert!(state.resolve(&programs).unwrap().as_sparse().unwrap().is_empty());
    let shaders: StatePath = "Shaders".parse().unwrap();
    assert!(state.resolve(&shaders).unwrap().as_sparse().unwrap().is_empty());
}

#[test]
fn test_stencil_masks_display_hex() {
    let state = build_es2_state().unwrap();
    for path in [
        "PixelOperations/Stencil/StencilValueMask",
        "PixelOperations/Stencil/StencilBackValueMask",
    ] {
        let path: StatePath = path.parse().unwrap();
        let mask = state.resolve(&path).unwrap().as_scalar().unwrap();
        assert_eq!(mask.radix(), DisplayRadix::Hex);
        assert_eq!(mask.value(), &StateValue::Integer(0xffff_ffff));
        assert_eq!(mask.display_value(), "0xffffffff");
    }
}

#[test]
fn test_blend_factor_placeholders_preserved() {
    let state = build_es2_state().unwrap();
    for (path, symbol) in [
        ("PixelOperations/Blend/BlendSrcRgb", GlEnum::Lines),
        ("PixelOperations/Blend/BlendSrcAlpha", GlEnum::Lines),
        ("PixelOperations/Blend/BlendDstRgb", GlEnum::Points),
        ("PixelOperations/Blend/BlendDstAlpha", GlEnum::Points),
    ] {
        assert_eq!(leaf_value(&state, path), StateValue::Enum(symbol), "{path}");
    }
    // Numerically these are GL_ONE and GL_ZERO
    assert_eq!(GlEnum::Lines.value(), GlEnum::One.value());
    assert_eq!(GlEnum::Points.value(), GlEnum::Zero.value());
}

#[test]
fn test_aliased_symbols_rejected_outside_domain() {
    let mut state = build_es2_state().unwrap();
    let pristine = state.clone();

    let stencil_fail: StatePath = "PixelOperations/Stencil/StencilFail".parse().unwrap();
    let err = state.set_value(&stencil_fail, GlEnum::Points).unwrap_err();
    assert_eq!(
        err,
        StateError::OutOfDomain {
            state_type: StateType::StencilFail,
            value: GlEnum::Points,
        }
    );
    assert_eq!(
        leaf_value(&state, "PixelOperations/Stencil/StencilFail"),
        StateValue::Enum(GlEnum::Keep)
    );

    let dst_rgb: StatePath = "PixelOperations/Blend/BlendDstRgb".parse().unwrap();
    let err = state.parse_value_at(&dst_rgb, "GL_LINES").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
    assert_eq!(state, pristine);
}

#[test]
fn test_blend_func_one_zero_is_not_a_change() {
    let mut state = build_es2_state().unwrap();
    for (path, symbol) in [
        ("PixelOperations/Blend/BlendSrcRgb", GlEnum::One),
        ("PixelOperations/Blend/BlendSrcAlpha", GlEnum::One),
        ("PixelOperations/Blend/BlendDstRgb", GlEnum::Zero),
        ("PixelOperations/Blend/BlendDstAlpha", GlEnum::Zero),
    ] {
        let path: StatePath = path.parse().unwrap();
        state.set_value(&path, symbol).unwrap();
    }
    assert!(changed_values(&state).is_empty());

    let dst_rgb: StatePath = "PixelOperations/Blend/BlendDstRgb".parse().unwrap();
    state.set_value(&dst_rgb, GlEnum::OneMinusSrcAlpha).unwrap();
    let changed = changed_values(&state);
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].0, dst_rgb);
}

#[test]
fn test_add_texture_object() {
    let mut state = build_es2_state().unwrap();
    state.add_handle(&textures_path(), 5).unwrap();

    let textures = state.resolve(&textures_path()).unwrap().as_sparse().unwrap();
    assert_eq!(textures.handles().collect::<Vec<_>>(), vec![0, 5]);

    let texture = textures.get(5).unwrap().as_composite().unwrap();
    for tag in [StateType::TextureMinFilter, StateType::TextureMagFilter] {
        let filter = texture.lookup(tag).unwrap().as_scalar().unwrap();
        assert_eq!(filter.value(), &StateValue::Enum(GlEnum::Nearest), "{tag:?}");
        assert!(filter.is_default());
    }
}

#[test]
fn test_texture_objects_are_independent() {
    let mut state = build_es2_state().unwrap();
    state.add_handle(&textures_path(), 5).unwrap();

    let min_filter_5: StatePath = "TextureState/Textures#5/TextureMinFilter".parse().unwrap();
    state.set_value(&min_filter_5, GlEnum::Linear).unwrap();

    assert_eq!(
        leaf_value(&state, "TextureState/Textures#0/TextureMinFilter"),
        StateValue::Enum(GlEnum::Nearest)
    );

    let textures = state.resolve(&textures_path()).unwrap().as_sparse().unwrap();
    let template = textures.template().as_composite().unwrap();
    let filter = template.lookup(StateType::TextureMinFilter).unwrap();
    assert!(filter.as_scalar().unwrap().is_default());

    // Adding again keeps the modified entry
    state.add_handle(&textures_path(), 5).unwrap();
    assert_eq!(
        leaf_value(&state, "TextureState/Textures#5/TextureMinFilter"),
        StateValue::Enum(GlEnum::Linear)
    );
}

#[test]
fn test_vertex_attrib_slot_isolation() {
    let mut state = build_es2_state().unwrap();
    let enabled = |slot: usize| {
        StatePath::new()
            .field(StateType::VertexArrayData)
            .field(StateType::VertexAttribArray)
            .index(slot)
            .field(StateType::VertexAttribArrayEnabled)
    };

    state.set_value(&enabled(3), true).unwrap();

    for slot in 0..VERTEX_ATTRIB_COUNT {
        let value = state.resolve(&enabled(slot)).unwrap().as_scalar().unwrap().value();
        assert_eq!(value, &StateValue::Boolean(slot == 3), "slot {slot}");
    }
}

#[test]
fn test_deleted_object_is_not_found() {
    let mut state = build_es2_state().unwrap();
    let shaders: StatePath = "Shaders".parse().unwrap();
    state.add_handle(&shaders, 3).unwrap();

    let source: StatePath = "Shaders#3/ShaderSource".parse().unwrap();
    state.set_value(&source, "void main() {}").unwrap();

    assert!(state.remove_handle(&shaders, 3).unwrap().is_some());
    let err = state.set_value(&source, "again").unwrap_err();
    assert_eq!(
        err,
        StateError::HandleNotFound {
            state_type: StateType::Shaders,
            handle: 3,
        }
    );
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn test_es1_omits_es2_only_subtrees() {
    let state = build_es1_state().unwrap();
    assert_eq!(state.state_type(), StateType::GlStateEs1);

    for present in [
        StateType::FramebufferState,
        StateType::TransformationState,
        StateType::RasterizationState,
        StateType::PixelOperations,
        StateType::PixelPacking,
        StateType::TextureState,
    ] {
        assert!(state.find(present).is_some(), "{present:?} missing");
    }
    for absent in [
        StateType::VertexArrayData,
        StateType::ProgramState,
        StateType::Shaders,
    ] {
        assert!(state.find(absent).is_none(), "{absent:?} present");
    }

    let composite = state.as_composite().unwrap();
    assert_eq!(composite.len(), 6);
    assert!(matches!(
        composite.lookup(StateType::ProgramState),
        Err(StateError::ChildNotFound { .. })
    ));
}

#[test]
fn test_shared_subtrees_match_between_profiles() {
    let es1 = build_es1_state().unwrap();
    let es2 = build_es2_state().unwrap();
    for tag in [
        StateType::TransformationState,
        StateType::PixelOperations,
        StateType::TextureState,
    ] {
        assert_eq!(es1.find(tag), es2.find(tag), "{tag:?}");
    }
}

#[test]
fn test_empty_root() {
    let mut root = build_empty_root();
    assert_eq!(root.state_type(), StateType::GlState);

    let contexts = root.as_list_mut().unwrap();
    assert!(contexts.is_empty());
    assert!(contexts.template().is_none());

    assert_eq!(contexts.push(build_es2_state().unwrap()), Ok(0));
    assert_eq!(contexts.push(build_es1_state().unwrap()), Ok(1));

    let viewport_width: StatePath = "[0]/TransformationState/Viewport/ViewportWidth"
        .parse()
        .unwrap();
    root.set_value(&viewport_width, 800).unwrap();
    assert_eq!(
        leaf_value(&root, "[0]/TransformationState/Viewport/ViewportWidth"),
        StateValue::Integer(800)
    );
    assert_eq!(
        leaf_value(&root, "[1]/TransformationState/Viewport/ViewportWidth"),
        StateValue::Integer(0)
    );
}

#[test]
fn test_fixed_lists_reject_push() {
    let mut state = build_es2_state().unwrap();
    let units: StatePath = "TextureState/TextureUnits".parse().unwrap();
    let units = state.resolve_mut(&units).unwrap().as_list_mut().unwrap();
    let extra = units.get(0).unwrap().clone();

    let err = units.push(extra).unwrap_err();
    assert_eq!(err, StateError::NotGrowable(StateType::TextureUnits));
    assert_eq!(err.category(), ErrorCategory::Bounds);
    assert_eq!(units.len(), TEXTURE_UNIT_COUNT);
}

#[test]
fn test_reset_restores_defaults() {
    let mut state = build_es2_state().unwrap();
    state.add_handle(&textures_path(), 7).unwrap();

    for (path, text) in [
        ("PixelOperations/Dither", "false"),
        ("PixelOperations/Stencil/StencilBackValueMask", "0xff"),
        ("VertexArrayData/VertexAttribArray[6]/VertexAttribArrayStride", "16"),
        ("TextureState/Textures#7/TextureWrapT", "GL_CLAMP_TO_EDGE"),
        ("TextureState/TextureUnits[2]/TextureBinding2d", "7"),
    ] {
        let path: StatePath = path.parse().unwrap();
        state.parse_value_at(&path, text).unwrap();
    }
    assert_eq!(changed_values(&state).len(), 5);

    state.reset();
    assert!(changed_values(&state).is_empty());
    assert_eq!(state, {
        let mut expected = build_es2_state().unwrap();
        expected.add_handle(&textures_path(), 7).unwrap();
        expected
    });
}

#[test]
fn test_reset_subtree_only() {
    let mut state = build_es2_state().unwrap();
    let line_width: StatePath = "RasterizationState/LineWidth".parse().unwrap();
    let dither: StatePath = "PixelOperations/Dither".parse().unwrap();
    state.set_value(&line_width, 2.0f32).unwrap();
    state.set_value(&dither, false).unwrap();

    state.reset_at(&"RasterizationState".parse().unwrap()).unwrap();
    assert_eq!(leaf_value(&state, "RasterizationState/LineWidth"), StateValue::Float(1.0));
    assert_eq!(leaf_value(&state, "PixelOperations/Dither"), StateValue::Boolean(false));
}

#[test]
fn test_clone_does_not_alias() {
    let original = build_es2_state().unwrap();
    let mut copy = original.clone();

    let front_face: StatePath = "RasterizationState/FrontFace".parse().unwrap();
    copy.set_value(&front_face, GlEnum::Cw).unwrap();
    copy.add_handle(&textures_path(), 9).unwrap();

    assert_eq!(leaf_value(&original, "RasterizationState/FrontFace"), StateValue::Enum(GlEnum::Ccw));
    let textures = original.resolve(&textures_path()).unwrap().as_sparse().unwrap();
    assert!(!textures.contains(9));
}

#[test]
fn test_failed_mutations_leave_tree_untouched() {
    let mut state = build_es2_state().unwrap();
    let pristine = state.clone();

    let cull_mode: StatePath = "RasterizationState/CullFaceMode".parse().unwrap();
    let err = state.set_value(&cull_mode, GlEnum::Repeat).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);

    let err = state.set_value(&cull_mode, 3).unwrap_err();
    assert!(matches!(err, StateError::TypeMismatch { .. }));

    let slot: StatePath = "VertexArrayData/VertexAttribArray[8]/VertexAttribArraySize"
        .parse()
        .unwrap();
    assert_eq!(state.set_value(&slot, 2).unwrap_err().category(), ErrorCategory::Bounds);

    // A field segment applied to a list
    let wrong_kind: StatePath = "TextureState/TextureUnits/TextureBinding2d".parse().unwrap();
    let err = state.set_value(&wrong_kind, 1).unwrap_err();
    assert!(matches!(err, StateError::KindMismatch { .. }));

    // A sparse operation on a composite
    let err = state.add_handle(&"TextureState".parse().unwrap(), 1).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);

    assert_eq!(state, pristine);
}

#[test]
fn test_profile_dispatch() {
    assert_eq!(Profile::from_version(1), Some(Profile::Es1));
    assert_eq!(Profile::from_version(2), Some(Profile::Es2));
    assert_eq!(Profile::from_version(3), None);

    for profile in [Profile::Es1, Profile::Es2] {
        let state = profile.build().unwrap();
        assert_eq!(state.state_type(), profile.root_type());
    }
    assert_eq!(Profile::Es2.build().unwrap(), build_es2_state().unwrap());
}
