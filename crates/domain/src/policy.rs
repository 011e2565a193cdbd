// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::ValueIntervalCollection;
use crate::error::{DomainError, ParseError};
use crate::interval::ValueInterval;
use crate::parameter::{Parameter, ParameterName};
use crate::wire::PolicyPayload;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The country whose tax-benefit model a policy applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountryId {
    /// United States.
    #[default]
    Us,
    /// United Kingdom.
    Uk,
    /// Canada.
    Ca,
    /// Nigeria.
    Ng,
    /// Israel.
    Il,
}

impl CountryId {
    /// Converts this country to its API identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Uk => "uk",
            Self::Ca => "ca",
            Self::Ng => "ng",
            Self::Il => "il",
        }
    }
}

impl FromStr for CountryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Self::Us),
            "uk" => Ok(Self::Uk),
            "ca" => Ok(Self::Ca),
            "ng" => Ok(Self::Ng),
            "il" => Ok(Self::Il),
            _ => Err(DomainError::InvalidCountry(s.to_string())),
        }
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named set of parameter overrides relative to current law.
///
/// A policy starts as a local draft with no `id`. Once submitted, the
/// server assigns an identifier and the policy's identity is fixed;
/// editing a created policy means forking it into a new draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedPolicy")]
pub struct Policy {
    /// Server-assigned identifier. `None` until the policy is created.
    id: Option<String>,
    /// Human-readable label.
    label: Option<String>,
    /// The country this policy applies to.
    country_id: CountryId,
    /// Parameter overrides, in the order they were first edited.
    parameters: Vec<Parameter>,
    /// Whether the server has accepted this policy.
    is_created: bool,
}

impl Policy {
    /// Creates a new draft policy with no parameters.
    #[must_use]
    pub const fn draft(country_id: CountryId, label: Option<String>) -> Self {
        Self {
            id: None,
            label,
            country_id,
            parameters: Vec::new(),
            is_created: false,
        }
    }

    /// Builds a draft policy from a whole-policy wire payload.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for the first parameter name or date range
    /// key that fails to parse.
    pub fn from_payload(
        country_id: CountryId,
        label: Option<String>,
        payload: &PolicyPayload,
    ) -> Result<Self, ParseError> {
        let parameters: Vec<Parameter> = payload
            .iter()
            .map(|(name, values)| Parameter::from_api_values(name, values))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            parameters,
            ..Self::draft(country_id, label)
        })
    }

    /// Returns the server-assigned identifier, if created.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the country.
    #[must_use]
    pub const fn country_id(&self) -> CountryId {
        self.country_id
    }

    /// Returns the parameter overrides.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns whether the server has accepted this policy.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.is_created
    }

    /// Returns whether this policy changes nothing relative to current law.
    #[must_use]
    pub fn is_current_law(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name().as_str() == name)
    }

    /// Replaces the label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Overrides a parameter's value for the interval's range.
    ///
    /// The parameter is added to the policy if it is not already present.
    pub fn add_parameter_interval(&mut self, name: &ParameterName, interval: ValueInterval) {
        self.add_parameter_intervals(name, [interval]);
    }

    /// Overrides a parameter with each interval in turn, later ones winning.
    ///
    /// The parameter is added even when `intervals` is empty, leaving an
    /// override with no values.
    pub fn add_parameter_intervals(
        &mut self,
        name: &ParameterName,
        intervals: impl IntoIterator<Item = ValueInterval>,
    ) {
        let idx: usize = match self.parameters.iter().position(|p| p.name() == name) {
            Some(idx) => idx,
            None => {
                self.parameters.push(Parameter::new(
                    name.clone(),
                    ValueIntervalCollection::new(),
                ));
                self.parameters.len() - 1
            }
        };

        for interval in intervals {
            self.parameters[idx].add_interval(interval);
        }
    }

    /// Returns an uncreated copy of this policy for further editing.
    ///
    /// The label, country and overrides carry over; the identifier does not.
    #[must_use]
    pub fn forked(&self) -> Self {
        Self {
            id: None,
            is_created: false,
            ..self.clone()
        }
    }

    /// Removes a parameter override, returning it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ParameterNotFound` if the policy does not
    /// override this parameter.
    pub fn remove_parameter(&mut self, name: &str) -> Result<Parameter, DomainError> {
        let idx: usize = self
            .parameters
            .iter()
            .position(|p| p.name().as_str() == name)
            .ok_or_else(|| DomainError::ParameterNotFound(name.to_string()))?;
        Ok(self.parameters.remove(idx))
    }

    /// Records the identifier the server assigned to this policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or the policy has
    /// already been created.
    pub fn mark_created(&mut self, id: &str) -> Result<(), DomainError> {
        if let Some(existing) = &self.id {
            return Err(DomainError::PolicyAlreadyCreated {
                id: existing.clone(),
            });
        }
        let id: &str = id.trim();
        if id.is_empty() {
            return Err(DomainError::InvalidPolicyId(String::from(
                "id cannot be empty",
            )));
        }

        self.id = Some(id.to_string());
        self.is_created = true;
        Ok(())
    }

    /// Renders the policy in the whole-policy wire format.
    #[must_use]
    pub fn to_payload(&self) -> PolicyPayload {
        self.parameters
            .iter()
            .map(|p| (p.name().to_string(), p.to_api_values()))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedPolicy {
    id: Option<String>,
    label: Option<String>,
    country_id: CountryId,
    parameters: Vec<Parameter>,
    is_created: bool,
}

impl TryFrom<UncheckedPolicy> for Policy {
    type Error = DomainError;

    fn try_from(raw: UncheckedPolicy) -> Result<Self, Self::Error> {
        let mut policy: Self = Self {
            parameters: raw.parameters,
            ..Self::draft(raw.country_id, raw.label)
        };

        match (raw.id, raw.is_created) {
            (Some(id), true) => policy.mark_created(&id)?,
            (None, false) => {}
            (Some(_), false) | (None, true) => {
                return Err(DomainError::InvalidPolicyId(String::from(
                    "isCreated must be true exactly when an id is present",
                )));
            }
        }
        Ok(policy)
    }
}
