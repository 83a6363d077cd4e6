/// Instanced square points with optional size attenuation
pub const SHADER_POINTS: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,
    // x: point size, y: size attenuation flag, z: pixel ratio
    params: vec4<f32>,
    // xy: drawing buffer size in device pixels
    resolution: vec4<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec3<f32>,
) -> @builtin(position) vec4<f32> {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-0.5, -0.5),
        vec2<f32>(0.5, -0.5),
        vec2<f32>(0.5, 0.5),
        vec2<f32>(-0.5, -0.5),
        vec2<f32>(0.5, 0.5),
        vec2<f32>(-0.5, 0.5),
    );
    let corner = corners[vertex_index];
    let clip = uniforms.view_proj * uniforms.model * vec4<f32>(center, 1.0);

    let pixel_ratio = uniforms.params.z;
    var size_px = uniforms.params.x * pixel_ratio;
    if (uniforms.params.y > 0.5) {
        let half_height = uniforms.resolution.y / pixel_ratio * 0.5;
        size_px = size_px * half_height / max(clip.w, 0.0001);
    }
    size_px = max(size_px, 1.0);

    let offset = corner * size_px * 2.0 / uniforms.resolution.xy;
    return vec4<f32>(clip.xy + offset * clip.w, clip.z, clip.w);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    let c = uniforms.color;
    return vec4<f32>(c.rgb * c.a, c.a);
}
"#;
