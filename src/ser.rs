use serde::{
    ser::{Serialize, SerializeMap, SerializeSeq},
    Serializer,
};

use crate::value::Value;

// 2^53, past which f64 no longer holds every integer
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn as_integer(num: f64) -> Option<i64> {
    let integral = num.is_finite() && num.fract() == 0.0 && num.abs() <= MAX_SAFE_INTEGER;

    if integral && !(num == 0.0 && num.is_sign_negative()) {
        Some(num as i64)
    } else {
        None
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Value::Number(num) => match as_integer(*num) {
                Some(int) => serializer.serialize_i64(int),
                None => serializer.serialize_f64(*num),
            },
            Value::String(str) => serializer.serialize_str(str),
            Value::Bool(bool) => serializer.serialize_bool(*bool),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;

                for v in array {
                    seq.serialize_element(v)?;
                }

                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;

                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }

                map.end()
            }
        }
    }
}
