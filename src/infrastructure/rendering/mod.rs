mod odf_render_engine;

pub use odf_render_engine::OdfRenderEngine;
