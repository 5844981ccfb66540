// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Interface to the providers of required parameter names.

/// A source of the names of the parameters that an operation cannot do without.
///
/// This is typically implemented by descriptors of the operations that a link points to, and is
/// used to strip the optional variables out of a template before offering it to a client.
pub trait RequiredParameters {
    /// Returns the names of the required parameters.
    fn required_parameters(&self) -> Vec<&str>;
}

impl<S: AsRef<str>> RequiredParameters for Vec<S> {
    fn required_parameters(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_of_owned() {
        let names = vec!["a".to_owned(), "b".to_owned()];
        assert_eq!(vec!["a", "b"], names.required_parameters());
    }

    #[test]
    fn test_vec_of_borrowed() {
        let names: Vec<&str> = vec![];
        assert!(names.required_parameters().is_empty());
    }
}
