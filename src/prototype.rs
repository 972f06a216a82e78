//! Prototype illustration: shallow versus deep copies.
//!
//! A [`Person`] keeps its [`IdInfo`] behind a shared cell. [`Person::shallow_copy`]
//! shares that cell with the copy, so a change to the copy's id shows up in the
//! original. [`Person::deep_copy`] gives the copy its own cell.

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdInfo {
    pub id_number: u32,
}

impl IdInfo {
    pub fn new(id_number: u32) -> Self {
        Self { id_number }
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub birth_date: NaiveDate,
    pub age: u32,
    pub id: Rc<RefCell<IdInfo>>,
}

impl Person {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, age: u32, id: IdInfo) -> Self {
        Self {
            name: name.into(),
            birth_date,
            age,
            id: Rc::new(RefCell::new(id)),
        }
    }

    /// Copies every field; the `IdInfo` cell is shared with `self`.
    pub fn shallow_copy(&self) -> Self {
        self.clone()
    }

    /// Copies every field, including a fresh `IdInfo` cell.
    pub fn deep_copy(&self) -> Self {
        Self {
            id: Rc::new(RefCell::new(*self.id.borrow())),
            ..self.clone()
        }
    }

    pub fn id_number(&self) -> u32 {
        self.id.borrow().id_number
    }

    pub fn set_id_number(&self, id_number: u32) {
        self.id.borrow_mut().id_number = id_number;
    }

    /// Two indented lines: name, age and birth date (`MM/dd/yy`), then the id.
    pub fn display_values(&self) -> String {
        format!(
            "      Name: {}, Age: {}, BirthDate: {}\n      ID#: {}",
            self.name,
            self.age,
            self.birth_date.format("%m/%d/%y"),
            self.id_number()
        )
    }
}
