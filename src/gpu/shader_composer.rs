use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor,
    ShaderLanguage, ShaderType,
};

use crate::error::PhylloError;

/// A top-level WGSL shader: source plus the path used in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ShaderDef {
    /// WGSL source, possibly containing `#import` directives.
    pub source: &'static str,
    /// Path reported in composition errors.
    pub file_path: &'static str,
}

/// The instanced spiral sprite shader (`vs_main` / `fs_main`).
pub const SPIRAL_SHADER: ShaderDef = ShaderDef {
    source: include_str!("../../assets/shaders/spiral.wgsl"),
    file_path: "spiral.wgsl",
};

/// Shared module definition: (source, file_path).
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

const MODULES: &[ModuleDef] = &[ModuleDef {
    source: include_str!("../../assets/shaders/modules/spiral_math.wgsl"),
    file_path: "modules/spiral_math.wgsl",
}];

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Shared WGSL modules are registered at construction; consuming shaders pull
/// them in with `#import phyllo::module_name::{...}`. Composition produces
/// `naga::Module` IR directly, so there is no WGSL re-parse at pipeline
/// creation.
pub struct ShaderComposer {
    composer: Composer,
}

impl ShaderComposer {
    /// Composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, PhylloError> {
        let mut composer = Composer::default();

        // Modules with no dependencies first.
        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    PhylloError::Shader(format!(
                        "failed to register module '{}': {e}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose `shader` into a `wgpu::ShaderModule` ready for pipeline
    /// creation.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        shader: ShaderDef,
    ) -> Result<wgpu::ShaderModule, PhylloError> {
        let naga_module = self.compose_naga(shader)?;
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader into a `naga::Module` without a GPU device.
    ///
    /// # Errors
    ///
    /// Returns [`PhylloError::Shader`] if composition fails.
    pub fn compose_naga(
        &mut self,
        shader: ShaderDef,
    ) -> Result<naga::Module, PhylloError> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source: shader.source,
                file_path: shader.file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                PhylloError::Shader(format!(
                    "failed to compose '{}': {e}",
                    shader.file_path
                ))
            })
    }
}
