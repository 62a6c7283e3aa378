//! The assembled scene and its frame loop.
//!
//! [`Stage`] is the single owner of everything the application mutates:
//! scene graph, camera, lights, flames, audio streams and hinges. The event
//! loop calls [`Stage::click`] for pointer clicks and [`Stage::frame`] once
//! per redraw; nothing else touches the state.

use glam::{DMat4, DVec2, DVec3};

use lighter_audio::{StreamBank, StreamId};
use lighter_core::{AppConfig, Result};
use lighter_scene::{
    Camera, FlameMaterial, FlameUniforms, Hit, LightRig, LighterNodes, LighterSpec, Material,
    NodeId, OrbitController, Raycaster, RotationAxis, SceneGraph, Shape, build_ground,
    build_lighter,
};

use crate::hinge::HingedObject;
use crate::toggle::{ToggleController, ToggleOutcome};

/// One lighter with the resources that belong to it.
#[derive(Clone, Debug)]
pub struct Lighter {
    pub spec: LighterSpec,
    pub nodes: LighterNodes,
    pub flame: FlameMaterial,
    pub stream: StreamId,
}

/// A mesh to draw this frame.
#[derive(Clone, Debug)]
pub struct DrawItem {
    pub node: NodeId,
    pub world: DMat4,
    pub shape: Shape,
    pub material: Material,
    /// Uniforms for flame-shaded meshes
    pub flame: Option<FlameUniforms>,
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub index: u64,
    pub view_projection: DMat4,
    pub camera_position: DVec3,
    pub items: Vec<DrawItem>,
}

/// The application context.
#[derive(Debug)]
pub struct Stage {
    graph: SceneGraph,
    camera: Camera,
    orbit: OrbitController,
    lights: LightRig,
    lighters: Vec<Lighter>,
    audio: StreamBank,
    toggles: ToggleController,
    viewport: (u32, u32),
    frames: u64,
}

impl Stage {
    /// Build the scene described by `config`.
    ///
    /// # Errors
    /// Fails if the config is invalid or a hinge direction has no length.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let viewport = (config.window.width, config.window.height);
        let mut graph = SceneGraph::new();
        let mut audio = StreamBank::new();
        let mut toggles = ToggleController::new(config.open_angle());

        build_ground(&mut graph);

        let mut lighters = Vec::with_capacity(config.lighters.len());
        for entry in &config.lighters {
            let axis = RotationAxis::new(
                DVec3::from_array(entry.hinge_pivot),
                DVec3::from_array(entry.hinge_direction),
            )?;
            let spec = LighterSpec {
                name: entry.name.clone(),
                body_color: entry.body_color,
                head_color: entry.head_color,
                position: DVec3::from_array(entry.position),
            };
            let nodes = build_lighter(&mut graph, &spec, viewport);
            let stream = audio.register(entry.sound.clone());
            toggles.add(HingedObject::new(
                spec.item_name(),
                spec.head_name(),
                axis,
                stream,
            ));
            lighters.push(Lighter {
                spec,
                nodes,
                flame: FlameMaterial::new(config.flame.time_step),
                stream,
            });
        }

        let mut camera = Camera::new();
        camera.position = DVec3::from_array(config.camera.position);
        camera.set_perspective(
            config.camera.fov_y_deg.to_radians(),
            f64::from(viewport.0) / f64::from(viewport.1),
            config.camera.near,
            config.camera.far,
        );
        let target = DVec3::from_array(config.camera.target);
        camera.look_at(target);
        let orbit = OrbitController::from_camera(&camera, target);

        tracing::info!(
            "Stage built: {} lighters, {} nodes",
            lighters.len(),
            graph.len()
        );

        Ok(Self {
            graph,
            camera,
            orbit,
            lights: LightRig::default(),
            lighters,
            audio,
            toggles,
            viewport,
            frames: 0,
        })
    }

    /// Read every pending sound file, returning how many loaded.
    pub fn load_audio(&mut self) -> usize {
        let ready = self.audio.load_pending();
        tracing::info!("{} of {} audio streams ready", ready, self.audio.len());
        ready
    }

    /// Frontmost mesh under a point in normalized device coordinates.
    pub fn pick(&self, ndc: DVec2) -> Option<Hit> {
        Raycaster::from_camera(ndc, &self.camera).pick(&self.graph)
    }

    /// Handle a click at a point in normalized device coordinates.
    pub fn click(&mut self, ndc: DVec2) -> Option<ToggleOutcome> {
        let hit = self.pick(ndc)?;
        tracing::debug!("Clicked '{}' at {:?}", hit.name, hit.point);
        self.hit(&hit.name)
    }

    /// Dispatch an already resolved hit name to the toggles.
    pub fn hit(&mut self, name: &str) -> Option<ToggleOutcome> {
        self.toggles.on_hit(name, &mut self.graph, &mut self.audio)
    }

    /// Orbit the camera by a pointer drag in pixels.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.orbit.rotate(dx, dy);
        self.orbit.apply(&mut self.camera);
    }

    /// Zoom the camera by scroll steps.
    pub fn zoom(&mut self, steps: f64) {
        self.orbit.zoom(steps);
        self.orbit.apply(&mut self.camera);
    }

    /// Track a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.camera.set_aspect(f64::from(width) / f64::from(height));
    }

    /// Advance animation and collect the draw list for one frame.
    pub fn frame(&mut self) -> Frame {
        for lighter in &mut self.lighters {
            let lit = self.toggles.is_open(&lighter.spec.item_name());
            lighter.flame.set_lit(lit);
            lighter.flame.tick();
        }

        let items = self
            .graph
            .meshes()
            .filter(|(id, _)| self.graph.is_visible(*id))
            .filter_map(|(id, node)| {
                let shape = node.shape?;
                let material = node.material.clone()?;
                let flame = self
                    .lighters
                    .iter()
                    .find(|l| l.nodes.flames.contains(&id))
                    .map(|l| *l.flame.uniforms());
                Some(DrawItem {
                    node: id,
                    world: self.graph.world_matrix(id),
                    shape,
                    material,
                    flame,
                })
            })
            .collect();

        self.frames += 1;
        Frame {
            index: self.frames,
            view_projection: self.camera.view_projection_matrix(),
            camera_position: self.camera.position,
            items,
        }
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn lighters(&self) -> &[Lighter] {
        &self.lighters
    }

    pub fn audio(&self) -> &StreamBank {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut StreamBank {
        &mut self.audio
    }

    pub fn toggles(&self) -> &ToggleController {
        &self.toggles
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}
