//! Serde support for [`Timestamp`]
//!
//! The record has exactly two fields, `timestamp` and `counter`. Field
//! names are part of the interchange format and must not change.

use core::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Timestamp;
use crate::error::FormatError;

const FIELDS: &[&str] = &["timestamp", "counter"];

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Timestamp", 2)?;
        state.serialize_field("timestamp", &self.physical)?;
        state.serialize_field("counter", &self.counter)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Timestamp,
            Counter,
        }

        struct TimestampVisitor;

        impl<'de> Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Timestamp")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Timestamp, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let physical: i64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let counter: u16 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Timestamp::new(physical, counter))
            }

            fn visit_map<V>(self, mut map: V) -> Result<Timestamp, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut physical: Option<i64> = None;
                let mut counter: Option<i64> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Timestamp => {
                            if physical.is_some() {
                                return Err(de::Error::duplicate_field("timestamp"));
                            }
                            physical = Some(map.next_value()?);
                        }
                        Field::Counter => {
                            if counter.is_some() {
                                return Err(de::Error::duplicate_field("counter"));
                            }
                            counter = Some(map.next_value()?);
                        }
                    }
                }

                let physical = physical
                    .ok_or_else(|| de::Error::custom(FormatError::MissingField("timestamp")))?;
                let counter = counter
                    .ok_or_else(|| de::Error::custom(FormatError::MissingField("counter")))?;

                // Read wide so out-of-range counters report the value.
                let counter = u16::try_from(counter).map_err(|_| {
                    de::Error::custom(FormatError::OutOfRange {
                        field: "counter",
                        value: i128::from(counter),
                    })
                })?;

                Ok(Timestamp::new(physical, counter))
            }
        }

        deserializer.deserialize_struct("Timestamp", FIELDS, TimestampVisitor)
    }
}
