//! GL symbolic constants used by enum-valued state.
//!
//! GL reuses numeric values across unrelated symbol groups (`GL_POINTS` and
//! `GL_ZERO` are both 0, `GL_LINES` and `GL_ONE` are both 1). Each symbol is a
//! distinct [`GlEnum`] variant; [`GlEnum::value`] exposes the numeric value.
//! Domain membership is decided by symbol, so an alias of a domain member is
//! not itself a member.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! gl_enums {
    ($($variant:ident => ($name:literal, $value:literal),)*) => {
        /// A GL symbolic constant
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GlEnum {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl GlEnum {
            /// Every known symbol, in declaration order
            pub const ALL: &'static [GlEnum] = &[$(GlEnum::$variant,)*];

            /// Numeric value as passed through the GL API
            pub fn value(self) -> u32 {
                match self {
                    $(GlEnum::$variant => $value,)*
                }
            }

            /// Canonical `GL_*` name
            pub fn name(self) -> &'static str {
                match self {
                    $(GlEnum::$variant => $name,)*
                }
            }
        }
    };
}

gl_enums! {
    // Primitive modes
    Points => ("GL_POINTS", 0x0000),
    Lines => ("GL_LINES", 0x0001),

    // Blend factors
    Zero => ("GL_ZERO", 0x0000),
    One => ("GL_ONE", 0x0001),
    SrcColor => ("GL_SRC_COLOR", 0x0300),
    OneMinusSrcColor => ("GL_ONE_MINUS_SRC_COLOR", 0x0301),
    SrcAlpha => ("GL_SRC_ALPHA", 0x0302),
    OneMinusSrcAlpha => ("GL_ONE_MINUS_SRC_ALPHA", 0x0303),
    DstAlpha => ("GL_DST_ALPHA", 0x0304),
    OneMinusDstAlpha => ("GL_ONE_MINUS_DST_ALPHA", 0x0305),
    DstColor => ("GL_DST_COLOR", 0x0306),
    OneMinusDstColor => ("GL_ONE_MINUS_DST_COLOR", 0x0307),
    SrcAlphaSaturate => ("GL_SRC_ALPHA_SATURATE", 0x0308),
    ConstantColor => ("GL_CONSTANT_COLOR", 0x8001),
    OneMinusConstantColor => ("GL_ONE_MINUS_CONSTANT_COLOR", 0x8002),
    ConstantAlpha => ("GL_CONSTANT_ALPHA", 0x8003),
    OneMinusConstantAlpha => ("GL_ONE_MINUS_CONSTANT_ALPHA", 0x8004),

    // Blend equations
    FuncAdd => ("GL_FUNC_ADD", 0x8006),
    FuncSubtract => ("GL_FUNC_SUBTRACT", 0x800A),
    FuncReverseSubtract => ("GL_FUNC_REVERSE_SUBTRACT", 0x800B),

    // Comparison functions
    Never => ("GL_NEVER", 0x0200),
    Less => ("GL_LESS", 0x0201),
    Equal => ("GL_EQUAL", 0x0202),
    Lequal => ("GL_LEQUAL", 0x0203),
    Greater => ("GL_GREATER", 0x0204),
    Notequal => ("GL_NOTEQUAL", 0x0205),
    Gequal => ("GL_GEQUAL", 0x0206),
    Always => ("GL_ALWAYS", 0x0207),

    // Faces and winding
    Front => ("GL_FRONT", 0x0404),
    Back => ("GL_BACK", 0x0405),
    FrontAndBack => ("GL_FRONT_AND_BACK", 0x0408),
    Cw => ("GL_CW", 0x0900),
    Ccw => ("GL_CCW", 0x0901),

    // Errors
    InvalidValue => ("GL_INVALID_VALUE", 0x0501),

    // Stencil operations
    Invert => ("GL_INVERT", 0x150A),
    Keep => ("GL_KEEP", 0x1E00),
    Replace => ("GL_REPLACE", 0x1E01),
    Incr => ("GL_INCR", 0x1E02),
    Decr => ("GL_DECR", 0x1E03),
    IncrWrap => ("GL_INCR_WRAP", 0x8507),
    DecrWrap => ("GL_DECR_WRAP", 0x8508),

    // Data types
    Byte => ("GL_BYTE", 0x1400),
    UnsignedByte => ("GL_UNSIGNED_BYTE", 0x1401),
    Short => ("GL_SHORT", 0x1402),
    UnsignedShort => ("GL_UNSIGNED_SHORT", 0x1403),
    Int => ("GL_INT", 0x1404),
    UnsignedInt => ("GL_UNSIGNED_INT", 0x1405),
    Float => ("GL_FLOAT", 0x1406),
    Fixed => ("GL_FIXED", 0x140C),
    UnsignedShort4444 => ("GL_UNSIGNED_SHORT_4_4_4_4", 0x8033),
    UnsignedShort5551 => ("GL_UNSIGNED_SHORT_5_5_5_1", 0x8034),
    UnsignedShort565 => ("GL_UNSIGNED_SHORT_5_6_5", 0x8363),

    // Pixel formats
    DepthComponent => ("GL_DEPTH_COMPONENT", 0x1902),
    Alpha => ("GL_ALPHA", 0x1906),
    Rgb => ("GL_RGB", 0x1907),
    Rgba => ("GL_RGBA", 0x1908),
    Luminance => ("GL_LUMINANCE", 0x1909),
    LuminanceAlpha => ("GL_LUMINANCE_ALPHA", 0x190A),

    // Texture filters
    Nearest => ("GL_NEAREST", 0x2600),
    Linear => ("GL_LINEAR", 0x2601),
    NearestMipmapNearest => ("GL_NEAREST_MIPMAP_NEAREST", 0x2700),
    LinearMipmapNearest => ("GL_LINEAR_MIPMAP_NEAREST", 0x2701),
    NearestMipmapLinear => ("GL_NEAREST_MIPMAP_LINEAR", 0x2702),
    LinearMipmapLinear => ("GL_LINEAR_MIPMAP_LINEAR", 0x2703),

    // Texture wrap modes
    Repeat => ("GL_REPEAT", 0x2901),
    ClampToEdge => ("GL_CLAMP_TO_EDGE", 0x812F),
    MirroredRepeat => ("GL_MIRRORED_REPEAT", 0x8370),

    // Shader types
    FragmentShader => ("GL_FRAGMENT_SHADER", 0x8B30),
    VertexShader => ("GL_VERTEX_SHADER", 0x8B31),
}

impl GlEnum {
    /// Look up a symbol by its canonical `GL_*` name
    pub fn from_name(name: &str) -> Option<GlEnum> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }

    /// Resolve a raw value against a domain.
    ///
    /// Trace decoders only see numbers; the domain disambiguates aliased
    /// values (1 is `GL_ONE` for a blend factor, `GL_LINES` for a draw mode).
    pub fn from_value_in(domain: &[GlEnum], value: u32) -> Option<GlEnum> {
        domain.iter().copied().find(|e| e.value() == value)
    }

    /// Whether this symbol belongs to `domain`
    pub fn is_in(self, domain: &[GlEnum]) -> bool {
        domain.contains(&self)
    }

    /// Whether this symbol's numeric value is shared by a member of `domain`
    pub fn aliases_into(self, domain: &[GlEnum]) -> bool {
        Self::from_value_in(domain, self.value()).is_some()
    }
}

impl fmt::Display for GlEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for GlEnum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GlEnum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        GlEnum::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown GL enum '{name}'")))
    }
}

/// Symbol domains for enum-valued state
pub mod domains {
    use super::GlEnum::{self, *};

    /// `glVertexAttribPointer` component types
    pub const VERTEX_ATTRIB_TYPE: &[GlEnum] =
        &[Byte, UnsignedByte, Short, UnsignedShort, Fixed, Float];

    /// `glCullFace` modes
    pub const CULL_FACE_MODE: &[GlEnum] = &[Front, Back, FrontAndBack];

    /// `glFrontFace` winding orders
    pub const FRONT_FACE: &[GlEnum] = &[Cw, Ccw];

    /// Depth and stencil comparison functions
    pub const COMPARE_FUNC: &[GlEnum] =
        &[Never, Less, Equal, Lequal, Greater, Notequal, Gequal, Always];

    /// `glStencilOp` actions
    pub const STENCIL_OP: &[GlEnum] =
        &[Keep, Zero, Replace, Incr, Decr, Invert, IncrWrap, DecrWrap];

    /// `glBlendFunc` factors
    pub const BLEND_FACTOR: &[GlEnum] = &[
        Zero,
        One,
        SrcColor,
        OneMinusSrcColor,
        DstColor,
        OneMinusDstColor,
        SrcAlpha,
        OneMinusSrcAlpha,
        DstAlpha,
        OneMinusDstAlpha,
        ConstantColor,
        OneMinusConstantColor,
        ConstantAlpha,
        OneMinusConstantAlpha,
        SrcAlphaSaturate,
    ];

    /// `glBlendEquation` modes
    pub const BLEND_EQUATION: &[GlEnum] = &[FuncAdd, FuncSubtract, FuncReverseSubtract];

    /// `GL_TEXTURE_MIN_FILTER` values
    pub const TEXTURE_MIN_FILTER: &[GlEnum] = &[
        Nearest,
        Linear,
        NearestMipmapNearest,
        LinearMipmapNearest,
        NearestMipmapLinear,
        LinearMipmapLinear,
    ];

    /// `GL_TEXTURE_MAG_FILTER` values
    pub const TEXTURE_MAG_FILTER: &[GlEnum] = &[Nearest, Linear];

    /// `GL_TEXTURE_WRAP_*` values
    pub const TEXTURE_WRAP: &[GlEnum] = &[Repeat, ClampToEdge, MirroredRepeat];

    /// `glTexImage2D` formats; `GL_INVALID_VALUE` marks "no image specified yet"
    pub const TEXTURE_FORMAT: &[GlEnum] = &[
        InvalidValue,
        Alpha,
        Rgb,
        Rgba,
        Luminance,
        LuminanceAlpha,
        DepthComponent,
    ];

    /// `glTexImage2D` pixel types
    pub const TEXTURE_IMAGE_TYPE: &[GlEnum] = &[
        UnsignedByte,
        UnsignedShort,
        UnsignedInt,
        UnsignedShort565,
        UnsignedShort4444,
        UnsignedShort5551,
        Float,
    ];

    /// `glCreateShader` types
    pub const SHADER_TYPE: &[GlEnum] = &[VertexShader, FragmentShader];
}
