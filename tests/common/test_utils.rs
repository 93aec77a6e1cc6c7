use std::{
    cell::Cell,
    path::{Path, PathBuf},
    rc::Rc,
};

use model_ngin::{Matrix4, gpu::DrawPass, gpu::GpuBackend};

/// Fresh directory under the system temp dir, unique per test and process.
pub(crate) fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("model-ngin-it-{}-{}", test, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("failed to clear scratch dir");
    }
    std::fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

pub(crate) fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

pub(crate) fn write_png(dir: &Path, name: &str, colour: [u8; 3]) {
    image::RgbImage::from_pixel(2, 2, image::Rgb(colour))
        .save(dir.join(name))
        .expect("failed to write texture fixture");
}

/// Two objects: `meshA` (two triangles, UVs, textured with wood.png) and
/// `meshB` (one triangle, no UVs, material without texture).
pub(crate) const TWO_MESH_OBJ: &str = "\
mtllib scene.mtl
o meshA
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
usemtl wood
f 1/1 2/2 3/3
f 3/3 4/4 1/1
o meshB
v 2.0 0.0 0.0
v 3.0 0.0 0.0
v 2.0 1.0 0.0
usemtl plain
f 5 6 7
";

pub(crate) const TWO_MESH_MTL: &str = "\
newmtl wood
Kd 1.0 1.0 1.0
map_Kd wood.png

newmtl plain
Kd 0.5 0.5 0.5
";

/// Counts live GPU objects so tests can check that nothing leaks.
#[derive(Default)]
pub(crate) struct CountingBackend {
    pub live_buffers: Rc<Cell<usize>>,
    pub live_textures: Rc<Cell<usize>>,
    next_id: Cell<u32>,
}

pub(crate) struct Handle {
    pub id: u32,
    live: Rc<Cell<usize>>,
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl CountingBackend {
    fn handle(&self, live: &Rc<Cell<usize>>) -> Handle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        live.set(live.get() + 1);
        Handle {
            id,
            live: Rc::clone(live),
        }
    }
}

impl GpuBackend for CountingBackend {
    type Buffer = Handle;
    type Texture = Handle;

    fn create_index_buffer(&self, _: &str, _: &[u32]) -> Handle {
        self.handle(&self.live_buffers)
    }

    fn create_vertex_buffer(&self, _: &str, _: &[f32]) -> Handle {
        self.handle(&self.live_buffers)
    }

    fn create_texture(&self, _: &str, _: &image::RgbaImage) -> Handle {
        self.handle(&self.live_textures)
    }
}

/// Keeps a readable log of every command the renderer issued.
#[derive(Default)]
pub(crate) struct LoggingPass {
    pub log: Vec<String>,
}

fn id(buffer: Option<&Handle>) -> String {
    buffer.map_or("-".to_string(), |b| b.id.to_string())
}

impl DrawPass<CountingBackend> for LoggingPass {
    fn use_program(&mut self, _: &Matrix4<f32>) {
        self.log.push("program".into());
    }

    fn bind_texture(&mut self, texture: &Handle) {
        self.log.push(format!("texture {}", texture.id));
    }

    fn bind_index_buffer(&mut self, buffer: Option<&Handle>) {
        self.log.push(format!("indices {}", id(buffer)));
    }

    fn bind_position_buffer(&mut self, buffer: Option<&Handle>) {
        self.log.push(format!("positions {}", id(buffer)));
    }

    fn bind_uv_buffer(&mut self, buffer: Option<&Handle>) {
        self.log.push(format!("uvs {}", id(buffer)));
    }

    fn draw_indexed(&mut self, index_count: u32) {
        self.log.push(format!("draw {index_count}"));
    }
}
