//! The closure chain: three nested units sharing enclosing bindings
//!
//! `outer` binds `course`, defines `inner`, which binds `exclamation` and
//! defines `inception`. Each closure only sees what its enclosing frames
//! have bound at the point it is defined.

use std::cell::RefCell;
use std::io;

use tracing::{debug_span, trace};

use crate::domain::Greeting;

/// First line: the process-wide value on its own.
pub fn welcome_line(welcome: &str) -> String {
    welcome.to_string()
}

/// Welcome and course, separated by one space.
pub fn course_line(welcome: &str, course: &str) -> String {
    format!("{} {}", welcome, course)
}

/// Welcome and course with the punctuation glued to the course.
pub fn exclaim_line(welcome: &str, course: &str, exclamation: &str) -> String {
    format!("{} {}{}", welcome, course, exclamation)
}

/// Run the chain once, handing every line to `emit`.
///
/// Emits exactly four lines in call-stack order. The first failing `emit`
/// aborts the chain and its error is returned unchanged.
pub fn outer<F>(greeting: &Greeting, emit: F) -> io::Result<()>
where
    F: Fn(&str) -> io::Result<()>,
{
    let _span = debug_span!("outer").entered();
    let welcome = greeting.welcome.as_str();
    trace!(welcome, "visible: welcome");
    emit(&welcome_line(welcome))?;

    let course = greeting.course.as_str();

    let inner = || -> io::Result<()> {
        let _span = debug_span!("inner").entered();
        trace!(welcome, course, "visible: welcome, course");
        emit(&course_line(welcome, course))?;

        let exclamation = greeting.exclamation.as_str();

        let inception = || -> io::Result<()> {
            let _span = debug_span!("inception").entered();
            trace!(
                welcome,
                course,
                exclamation,
                "visible: welcome, course, exclamation"
            );
            emit(&exclaim_line(welcome, course, exclamation))
        };

        inception()?;
        emit(&course_line(welcome, course))
    };

    inner()
}

/// Collect the lines the chain would emit, without printing them.
pub fn lines(greeting: &Greeting) -> io::Result<Vec<String>> {
    let recorded = RefCell::new(Vec::with_capacity(4));
    outer(greeting, |line| {
        recorded.borrow_mut().push(line.to_string());
        Ok(())
    })?;
    Ok(recorded.into_inner())
}
