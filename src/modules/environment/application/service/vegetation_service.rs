use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::vegetation::{
    generate_patches, VegetationPatch,
};
use crate::modules::environment::application::ports::incoming::use_cases::GetVegetationUseCase;

#[derive(Debug, Clone, Copy, Default)]
pub struct VegetationService;

impl GetVegetationUseCase for VegetationService {
    fn execute(&self, center: Coordinates) -> Vec<VegetationPatch> {
        generate_patches(center, &mut rand::thread_rng())
    }
}
