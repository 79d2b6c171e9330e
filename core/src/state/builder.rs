//! Default state trees for each GL ES profile
//!
//! Pure assembly functions: each call builds a fresh, independently owned
//! tree. The subtree builders are shared between the two profiles.
//!
//! Default values follow the GL ES initial state tables, with one
//! known exception: the blend source factors default to `GL_LINES` and the
//! destination factors to `GL_POINTS`. GL defines them as `GL_ONE` and
//! `GL_ZERO`, which share those numeric values.

use gltrace_shared::{GlEnum, StateType, domains};

use super::error::StateError;
use super::property::{
    CompositeProperty, GlProperty, ListProperty, ScalarProperty, SparseArrayProperty,
};

/// Number of texture units modelled per context
pub const TEXTURE_UNIT_COUNT: usize = 8;

/// Number of generic vertex attribute slots modelled per context
pub const VERTEX_ATTRIB_COUNT: usize = 8;

/// GL ES API profile of a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// GL ES 1.x: fixed-function, no programs or generic attributes
    Es1,
    /// GL ES 2.0
    Es2,
}

impl Profile {
    /// Profile for a context's major version, if modelled
    pub fn from_version(major: u32) -> Option<Profile> {
        match major {
            1 => Some(Profile::Es1),
            2 => Some(Profile::Es2),
            _ => None,
        }
    }

    /// Tag of this profile's root composite
    pub fn root_type(self) -> StateType {
        match self {
            Profile::Es1 => StateType::GlStateEs1,
            Profile::Es2 => StateType::GlStateEs2,
        }
    }

    /// Build this profile's default tree
    pub fn build(self) -> Result<GlProperty, StateError> {
        match self {
            Profile::Es1 => build_es1_state(),
            Profile::Es2 => build_es2_state(),
        }
    }
}

fn composite(state_type: StateType, children: Vec<GlProperty>) -> Result<GlProperty, StateError> {
    Ok(CompositeProperty::new(state_type, children)?.into())
}

fn integer(state_type: StateType, default: i64) -> GlProperty {
    ScalarProperty::integer(state_type, default).into()
}

fn hex_integer(state_type: StateType, default: i64) -> GlProperty {
    ScalarProperty::hex_integer(state_type, default).into()
}

fn float(state_type: StateType, default: f32) -> GlProperty {
    ScalarProperty::float(state_type, default).into()
}

fn boolean(state_type: StateType, default: bool) -> GlProperty {
    ScalarProperty::boolean(state_type, default).into()
}

fn enumeration(
    state_type: StateType,
    default: GlEnum,
    domain: &'static [GlEnum],
) -> Result<GlProperty, StateError> {
    Ok(ScalarProperty::enumeration(state_type, default, domain)?.into())
}

fn string(state_type: StateType, default: Option<&str>) -> GlProperty {
    ScalarProperty::string(state_type, default).into()
}

/// Buffer object bindings, including one per vertex attribute
pub fn buffer_bindings() -> Result<GlProperty, StateError> {
    let per_attrib = integer(StateType::VertexAttribArrayBufferBindingPerIndex, 0);

    composite(
        StateType::BufferBindings,
        vec![
            integer(StateType::ArrayBufferBinding, 0),
            integer(StateType::ElementArrayBufferBinding, 0),
            ListProperty::new(
                StateType::VertexAttribArrayBufferBindings,
                per_attrib,
                VERTEX_ATTRIB_COUNT,
            )
            .into(),
        ],
    )
}

/// Generic vertex attribute array state, one slot per attribute
pub fn vertex_attrib_arrays() -> Result<GlProperty, StateError> {
    let per_attrib = composite(
        StateType::VertexAttribArrayComposite,
        vec![
            boolean(StateType::VertexAttribArrayEnabled, false),
            integer(StateType::VertexAttribArraySize, 4),
            integer(StateType::VertexAttribArrayStride, 0),
            enumeration(
                StateType::VertexAttribArrayType,
                GlEnum::Float,
                domains::VERTEX_ATTRIB_TYPE,
            )?,
            boolean(StateType::VertexAttribArrayNormalized, false),
            integer(StateType::VertexAttribArrayPointer, 0),
        ],
    )?;

    Ok(ListProperty::new(StateType::VertexAttribArray, per_attrib, VERTEX_ATTRIB_COUNT).into())
}

pub fn vertex_array_data() -> Result<GlProperty, StateError> {
    composite(
        StateType::VertexArrayData,
        vec![vertex_attrib_arrays()?, buffer_bindings()?],
    )
}

pub fn framebuffer_state() -> Result<GlProperty, StateError> {
    composite(
        StateType::FramebufferState,
        vec![integer(StateType::FramebufferBinding, 0)],
    )
}

/// Viewport and depth range
pub fn transformation_state() -> Result<GlProperty, StateError> {
    let viewport = composite(
        StateType::Viewport,
        vec![
            integer(StateType::ViewportX, 0),
            integer(StateType::ViewportY, 0),
            integer(StateType::ViewportWidth, 0),
            integer(StateType::ViewportHeight, 0),
        ],
    )?;

    let depth_range = composite(
        StateType::DepthRange,
        vec![
            float(StateType::DepthRangeNear, 0.0),
            float(StateType::DepthRangeFar, 1.0),
        ],
    )?;

    composite(StateType::TransformationState, vec![viewport, depth_range])
}

pub fn rasterization_state() -> Result<GlProperty, StateError> {
    composite(
        StateType::RasterizationState,
        vec![
            float(StateType::LineWidth, 1.0),
            boolean(StateType::CullFace, false),
            enumeration(StateType::CullFaceMode, GlEnum::Back, domains::CULL_FACE_MODE)?,
            enumeration(StateType::FrontFace, GlEnum::Ccw, domains::FRONT_FACE)?,
            float(StateType::PolygonOffsetFactor, 0.0),
            float(StateType::PolygonOffsetUnits, 0.0),
            boolean(StateType::PolygonOffsetFill, false),
        ],
    )
}

fn scissor_box() -> Result<GlProperty, StateError> {
    composite(
        StateType::ScissorBox,
        vec![
            integer(StateType::ScissorBoxX, 0),
            integer(StateType::ScissorBoxY, 0),
            integer(StateType::ScissorBoxWidth, 0),
            integer(StateType::ScissorBoxHeight, 0),
        ],
    )
}

/// Front and back stencil state
fn stencil() -> Result<GlProperty, StateError> {
    use domains::{COMPARE_FUNC, STENCIL_OP};

    composite(
        StateType::Stencil,
        vec![
            boolean(StateType::StencilTest, false),
            enumeration(StateType::StencilFunc, GlEnum::Always, COMPARE_FUNC)?,
            hex_integer(StateType::StencilValueMask, 0xffff_ffff),
            integer(StateType::StencilRef, 0),
            enumeration(StateType::StencilFail, GlEnum::Keep, STENCIL_OP)?,
            enumeration(StateType::StencilPassDepthFail, GlEnum::Keep, STENCIL_OP)?,
            enumeration(StateType::StencilPassDepthPass, GlEnum::Keep, STENCIL_OP)?,
            enumeration(StateType::StencilBackFunc, GlEnum::Always, COMPARE_FUNC)?,
            hex_integer(StateType::StencilBackValueMask, 0xffff_ffff),
            integer(StateType::StencilBackRef, 0),
            enumeration(StateType::StencilBackFail, GlEnum::Keep, STENCIL_OP)?,
            enumeration(StateType::StencilBackPassDepthFail, GlEnum::Keep, STENCIL_OP)?,
            enumeration(StateType::StencilBackPassDepthPass, GlEnum::Keep, STENCIL_OP)?,
        ],
    )
}

fn blend() -> Result<GlProperty, StateError> {
    use domains::{BLEND_EQUATION, BLEND_FACTOR};

    // Placeholders: GL_LINES == GL_ONE and GL_POINTS == GL_ZERO numerically
    composite(
        StateType::Blend,
        vec![
            boolean(StateType::BlendEnabled, false),
            enumeration(StateType::BlendSrcRgb, GlEnum::Lines, BLEND_FACTOR)?,
            enumeration(StateType::BlendSrcAlpha, GlEnum::Lines, BLEND_FACTOR)?,
            enumeration(StateType::BlendDstRgb, GlEnum::Points, BLEND_FACTOR)?,
            enumeration(StateType::BlendDstAlpha, GlEnum::Points, BLEND_FACTOR)?,
            enumeration(StateType::BlendEquationRgb, GlEnum::FuncAdd, BLEND_EQUATION)?,
            enumeration(StateType::BlendEquationAlpha, GlEnum::FuncAdd, BLEND_EQUATION)?,
        ],
    )
}

/// Scissor, stencil, depth test, blending and dithering
pub fn pixel_operations_state() -> Result<GlProperty, StateError> {
    composite(
        StateType::PixelOperations,
        vec![
            boolean(StateType::ScissorTest, false),
            scissor_box()?,
            stencil()?,
            boolean(StateType::DepthTest, false),
            enumeration(StateType::DepthFunc, GlEnum::Less, domains::COMPARE_FUNC)?,
            blend()?,
            boolean(StateType::Dither, true),
        ],
    )
}

pub fn pixel_pack_state() -> Result<GlProperty, StateError> {
    composite(
        StateType::PixelPacking,
        vec![
            integer(StateType::PackAlignment, 4),
            integer(StateType::UnpackAlignment, 4),
        ],
    )
}

/// Per-texture-object state, the template for each texture name
fn per_texture_state() -> Result<GlProperty, StateError> {
    composite(
        StateType::PerTextureState,
        vec![
            enumeration(
                StateType::TextureMinFilter,
                GlEnum::Nearest,
                domains::TEXTURE_MIN_FILTER,
            )?,
            enumeration(
                StateType::TextureMagFilter,
                GlEnum::Nearest,
                domains::TEXTURE_MAG_FILTER,
            )?,
            enumeration(StateType::TextureWrapS, GlEnum::Repeat, domains::TEXTURE_WRAP)?,
            enumeration(StateType::TextureWrapT, GlEnum::Repeat, domains::TEXTURE_WRAP)?,
            enumeration(
                StateType::TextureFormat,
                GlEnum::InvalidValue,
                domains::TEXTURE_FORMAT,
            )?,
            integer(StateType::TextureWidth, -1),
            integer(StateType::TextureHeight, -1),
            enumeration(
                StateType::TextureImageType,
                GlEnum::UnsignedByte,
                domains::TEXTURE_IMAGE_TYPE,
            )?,
            string(StateType::TextureImage, None),
        ],
    )
}

/// Active unit, per-unit bindings and texture objects
///
/// Texture object 0 (the default texture) exists from the start.
pub fn texture_state() -> Result<GlProperty, StateError> {
    let per_unit = composite(
        StateType::PerTextureUnitState,
        vec![
            integer(StateType::TextureBinding2d, 0),
            integer(StateType::TextureBindingCubeMap, 0),
        ],
    )?;
    let units = ListProperty::new(StateType::TextureUnits, per_unit, TEXTURE_UNIT_COUNT);

    let mut textures = SparseArrayProperty::new(StateType::Textures, per_texture_state()?);
    textures.add(0);

    composite(
        StateType::TextureState,
        vec![
            integer(StateType::ActiveTextureUnit, 0),
            units.into(),
            textures.into(),
        ],
    )
}

/// Current program and program objects with their attached shaders
pub fn program_state() -> Result<GlProperty, StateError> {
    let attached_shaders = SparseArrayProperty::new(
        StateType::AttachedShaders,
        integer(StateType::AttachedShaderId, 0),
    );
    let per_program = composite(StateType::PerProgramState, vec![attached_shaders.into()])?;
    let programs = SparseArrayProperty::new(StateType::Programs, per_program);

    composite(
        StateType::ProgramState,
        vec![integer(StateType::CurrentProgram, 0), programs.into()],
    )
}

/// Shader objects
pub fn shader_state() -> Result<GlProperty, StateError> {
    let per_shader = composite(
        StateType::PerShaderState,
        vec![
            enumeration(StateType::ShaderType, GlEnum::VertexShader, domains::SHADER_TYPE)?,
            string(StateType::ShaderSource, Some("")),
        ],
    )?;

    Ok(SparseArrayProperty::new(StateType::Shaders, per_shader).into())
}

/// Default state tree of a GL ES 2.0 context
pub fn build_es2_state() -> Result<GlProperty, StateError> {
    let state = composite(
        StateType::GlStateEs2,
        vec![
            vertex_array_data()?,
            framebuffer_state()?,
            transformation_state()?,
            rasterization_state()?,
            pixel_operations_state()?,
            pixel_pack_state()?,
            texture_state()?,
            program_state()?,
            shader_state()?,
        ],
    )?;
    tracing::debug!("built default GLES2 state ({} nodes)", state.node_count());
    Ok(state)
}

/// Default state tree of a GL ES 1.x context
///
/// Vertex attribute arrays, programs and shaders do not exist in this profile.
pub fn build_es1_state() -> Result<GlProperty, StateError> {
    let state = composite(
        StateType::GlStateEs1,
        vec![
            framebuffer_state()?,
            transformation_state()?,
            rasterization_state()?,
            pixel_operations_state()?,
            pixel_pack_state()?,
            texture_state()?,
        ],
    )?;
    tracing::debug!("built default GLES1 state ({} nodes)", state.node_count());
    Ok(state)
}

/// Root before any context exists: an empty list that takes one profile
/// tree per created context
pub fn build_empty_root() -> GlProperty {
    ListProperty::growable(StateType::GlState).into()
}
