//! Identifier tags for GL state properties.
//!
//! Every node in a state tree carries exactly one [`StateType`] naming its
//! semantic role. The identifier name (`name()`) is stable and is what paths
//! and serialized snapshots use; the display name is for UI labels.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! state_types {
    ($($variant:ident => $display:literal,)*) => {
        /// Semantic role of a node in a GL state tree
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StateType {
            $(
                #[doc = $display]
                $variant,
            )*
        }

        impl StateType {
            /// Every identifier tag, in declaration order
            pub const ALL: &'static [StateType] = &[$(StateType::$variant,)*];

            /// Stable identifier name (e.g. `ViewportWidth`)
            pub fn name(self) -> &'static str {
                match self {
                    $(StateType::$variant => stringify!($variant),)*
                }
            }

            /// Human-readable label (e.g. `Viewport Width`)
            pub fn display_name(self) -> &'static str {
                match self {
                    $(StateType::$variant => $display,)*
                }
            }
        }
    };
}

state_types! {
    // Roots
    GlState => "GL State",
    GlStateEs1 => "GLES1 State",
    GlStateEs2 => "GLES2 State",

    // Vertex array data
    VertexArrayData => "Vertex Array Data",
    VertexAttribArray => "Vertex Attrib Array Properties",
    VertexAttribArrayComposite => "Vertex Attrib Array",
    VertexAttribArrayEnabled => "Vertex Attrib Array Enable",
    VertexAttribArraySize => "Vertex Attrib Array Size",
    VertexAttribArrayStride => "Vertex Attrib Array Stride",
    VertexAttribArrayType => "Vertex Attrib Array Type",
    VertexAttribArrayNormalized => "Vertex Attrib Array Normalized",
    VertexAttribArrayPointer => "Vertex Attrib Array Pointer",

    // Buffer bindings
    BufferBindings => "Buffer Bindings",
    ArrayBufferBinding => "Array Buffer Binding",
    ElementArrayBufferBinding => "Element Array Buffer Binding",
    VertexAttribArrayBufferBindings => "Attribute Array Buffer Bindings",
    VertexAttribArrayBufferBindingPerIndex => "Attribute Array Buffer Binding",

    // Framebuffer
    FramebufferState => "Framebuffer State",
    FramebufferBinding => "Framebuffer Binding",

    // Transformation
    TransformationState => "Transformation State",
    Viewport => "Viewport",
    ViewportX => "Lower Left X",
    ViewportY => "Lower Left Y",
    ViewportWidth => "Width",
    ViewportHeight => "Height",
    DepthRange => "Depth Range",
    DepthRangeNear => "Near Clipping Plane",
    DepthRangeFar => "Far Clipping Plane",

    // Rasterization
    RasterizationState => "Rasterization State",
    LineWidth => "Line Width",
    CullFace => "Polygon Culling Enabled",
    CullFaceMode => "Cull Face Mode",
    FrontFace => "Polygon Winding",
    PolygonOffsetFactor => "Polygon Offset Factor",
    PolygonOffsetUnits => "Polygon Offset Units",
    PolygonOffsetFill => "Polygon Offset Enable",

    // Pixel operations
    PixelOperations => "Pixel Operations",
    ScissorTest => "Scissoring Enabled",
    ScissorBox => "Scissor Box",
    ScissorBoxX => "Lower Left X",
    ScissorBoxY => "Lower Left Y",
    ScissorBoxWidth => "Width",
    ScissorBoxHeight => "Height",
    Stencil => "Stencil",
    StencilTest => "Stencil Enable",
    StencilFunc => "Front Stencil Function",
    StencilValueMask => "Front Stencil Mask",
    StencilRef => "Front Stencil Reference Value",
    StencilFail => "Front Stencil Fail Action",
    StencilPassDepthFail => "Front stencil depth buffer fail action",
    StencilPassDepthPass => "Front stencil depth buffer pass action",
    StencilBackFunc => "Back Stencil Function",
    StencilBackValueMask => "Back Stencil Mask",
    StencilBackRef => "Back Stencil Reference Value",
    StencilBackFail => "Back Stencil Fail Action",
    StencilBackPassDepthFail => "Back stencil depth buffer fail action",
    StencilBackPassDepthPass => "Back stencil depth buffer pass action",
    DepthTest => "Depth Test Enabled",
    DepthFunc => "Depth Test Function",
    Blend => "Blending",
    BlendEnabled => "Enabled",
    BlendSrcRgb => "Source RGB Function",
    BlendSrcAlpha => "Source Alpha Function",
    BlendDstRgb => "Destination RGB Function",
    BlendDstAlpha => "Destination Alpha Function",
    BlendEquationRgb => "RGB Equation",
    BlendEquationAlpha => "Alpha Equation",
    Dither => "Dithering Enabled",

    // Pixel packing
    PixelPacking => "Pixel Packing",
    PackAlignment => "Pack Alignment",
    UnpackAlignment => "Unpack Alignment",

    // Textures
    TextureState => "Texture State",
    ActiveTextureUnit => "Active Texture Unit",
    TextureUnits => "Texture Units",
    PerTextureUnitState => "Texture Unit",
    TextureBinding2d => "TEXTURE_2D Binding",
    TextureBindingCubeMap => "TEXTURE_CUBE_MAP Binding",
    Textures => "Textures",
    PerTextureState => "Per Texture State",
    TextureMinFilter => "Minification Function",
    TextureMagFilter => "Magnification Function",
    TextureWrapS => "Texcoord s Wrap Mode",
    TextureWrapT => "Texcoord t Wrap Mode",
    TextureFormat => "Format",
    TextureWidth => "Width",
    TextureHeight => "Height",
    TextureImageType => "Image Type",
    TextureImage => "Image",

    // Programs
    ProgramState => "Program Object State",
    CurrentProgram => "Current Program",
    Programs => "Programs",
    PerProgramState => "Per Program State",
    AttachedShaders => "Attached Shaders",
    AttachedShaderId => "Attached Shader ID",

    // Shaders
    Shaders => "Shaders",
    PerShaderState => "Per Shader State",
    ShaderType => "Shader Type",
    ShaderSource => "Source",
}

impl StateType {
    /// Look up a tag by its identifier name
    pub fn from_name(name: &str) -> Option<StateType> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for StateType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StateType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        StateType::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown state type '{name}'")))
    }
}
