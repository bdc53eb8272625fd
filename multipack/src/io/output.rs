use serde::{Deserialize, Serialize};

use crate::config::MultipackConfig;
use crate::io::ext_repr::{ExtInstance, ExtSolution};

#[derive(Serialize, Deserialize, Clone)]
pub struct MPOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: MultipackConfig,
}
