//! Built-in example maze
//!
//! A 15x27 maze with its solution drawn in `*`, preceded by a blank line.
//! The entrance is the open top of the first column and the exit the open
//! bottom of the last one.

/// Example maze lines, as they would be read from a file
pub const EXAMPLE_MAZE: [&str; 17] = [
    "                                                       ",
    "    _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _",
    "|_ _ _ _ _ *| |  _ _ _   _ _|  _ _ _ * *|* _ _ _ _ *| |",
    "|  _ _  | |*|_  |_ _  |_ _ _ _|* _ _ _|_ _|_   _|* _| |",
    "| |_ _  | |_ *|_ _  |_   _  | |*| |    _ _  | |* _|  _|",
    "| |* *|_  | |*|_  |_ _ _|  _| |*|_  |_  |  _ _|_ *|_  |",
    "|* _|*| |_  |_ *|  _ _  | |  _|_ *| |  _|_  |* _ _|* *|",
    "|*| |*|_ _ _|* _| |_  |_ _|_ _  |*|_|   |_  |_ _ _ _|*|",
    "|_ *|_ _ _ _ _| |_  |   |    _ _|_ *| |_  |_|* _ * _|*|",
    "| |_ *|_ _   _ _ _| | |  _|_|* _ _ _|_|   |* _| |_ _ _|",
    "|* *|_ _ *| |   |  _ _|_|* _ _|* *|* * _|_|*|  _ _ _  |",
    "|*|_ * _|*|  _| | | |* *|*| |* _|_ _|_ *|* _|_|* _ *| |",
    "|_ *|_ _ _|_  | | | |*|_ _|* _|  _ _  |_ _|* _ _| |*| |",
    "|* _|_ _ * *|_|_ _ _|_ *|* _|  _ _ _|  _ _ *|* *|* _| |",
    "|_ _ *|* _|_ _ _ _ _ _ _|*|  _| |* *| |* _ _|*|_ _|* *|",
    "|* _ _|*|  _ _   _|   |* _|_ _ _|*|*|_|*| |* _|* _ _|*|",
    "|_ _ _ _|_ _ _|_ _ _|_ _ _ _ _ _ _|_ _ _|_ _ _ _|_ _ *|",
];

/// The example maze as one block of text
pub fn example_text() -> String {
    EXAMPLE_MAZE.join("\n")
}
