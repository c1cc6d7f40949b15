
use residencia_test_utils::prelude::*;

use crate::error::Error;
use crate::model::{CareerInput, Collection, SanctionInput};

use super::*;
