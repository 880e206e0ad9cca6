use crate::core::{Lesson, Operand, Step};

const BASICS_NAME: &str = "basics";
const BASICS_DESCRIPTION: &str =
    "Printing text, declaring and reassigning variables, and string concatenation";

impl Lesson {
    /// The built-in first lesson.
    pub fn basics() -> Self {
        let mut steps = vec![
            Step::print_text("Hello World")
                .with_note("print a line of text to the console"),
            Step::print_text("Hello World!"),
            Step::print_text("I am learning Java."),
            Step::print_text("It is awesome!"),
            Step::declare("a", 10).with_note("integer variable"),
            Step::declare("b", 20.5).with_note("double variable"),
            Step::declare("c", "Hello").with_note("string variable"),
            Step::declare("d", true).with_note("boolean variable"),
            Step::declare("e", 'A').with_note("character variable"),
        ];

        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            let step = Step::print(vec![
                Operand::text(format!("The value of {} is ", name)),
                Operand::var(*name),
            ]);
            steps.push(if i == 0 {
                step.with_note(
                    "the + operator joins text and a variable's value into one string",
                )
            } else {
                step
            });
        }

        steps.extend([
            Step::assign("a", 15).with_note("reassigning value to a"),
            Step::assign("b", 25.5).with_note("reassigning value to b"),
            Step::assign("c", "World").with_note("reassigning value to c"),
            Step::assign("d", false).with_note("reassigning value to d"),
            Step::assign("e", 'B').with_note("reassigning value to e"),
        ]);

        for name in ["a", "b", "c", "d", "e"] {
            steps.push(Step::print(vec![
                Operand::text(format!("After reassignment, the value of {} is ", name)),
                Operand::var(name),
            ]));
        }

        steps.extend([
            Step::declare("name", "John").with_note("string variable"),
            Step::concat(
                "greeting",
                vec![
                    Operand::text("Hello, "),
                    Operand::var("name"),
                    Operand::text("!"),
                ],
            )
            .with_note("string concatenation"),
            Step::print(vec![Operand::var("greeting")]).with_note("prints \"Hello, John!\""),
        ]);

        Self {
            name: BASICS_NAME.to_string(),
            description: BASICS_DESCRIPTION.to_string(),
            steps,
        }
    }
}
