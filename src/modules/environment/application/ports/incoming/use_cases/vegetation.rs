use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::vegetation::VegetationPatch;

pub trait GetVegetationUseCase: Send + Sync {
    fn execute(&self, center: Coordinates) -> Vec<VegetationPatch>;
}
