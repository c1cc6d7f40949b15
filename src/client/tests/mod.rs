mod mutate;

use residencia_test_utils::prelude::*;

use crate::error::Error;
use crate::model::{Career, CareerInput, Collection};

use super::*;
