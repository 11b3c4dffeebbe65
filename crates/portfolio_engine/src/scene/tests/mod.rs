//! Scenario tests driving a full manager through the frame clock
