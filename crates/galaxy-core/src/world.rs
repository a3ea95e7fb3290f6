use crate::camera::Camera;
use crate::config::FieldConfig;
use crate::motion::MotionParams;
use crate::pool::FieldObject;

/// All animation state for one page: the object pool, its motion parameters
/// (index-aligned) and the camera they are clamped against.
#[derive(Clone, Debug)]
pub struct AnimationWorld {
    pub config: FieldConfig,
    pub camera: Camera,
    pub objects: Vec<FieldObject>,
    pub params: Vec<MotionParams>,
    /// Last global progress applied by the mapper.
    pub progress: f32,
}

impl AnimationWorld {
    pub fn new(
        config: FieldConfig,
        camera: Camera,
        objects: Vec<FieldObject>,
        params: Vec<MotionParams>,
    ) -> Self {
        debug_assert_eq!(objects.len(), params.len());
        Self {
            config,
            camera,
            objects,
            params,
            progress: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
