mod snapshot;

use residencia_test_utils::prelude::*;

use crate::error::Error;
use crate::model::Collection;

use super::*;
