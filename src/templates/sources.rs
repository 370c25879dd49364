//! Starter source files.

/// `src/main.cpp` for C++ projects.
pub const CPP_MAIN: &str = r#"#include "pch.hpp"

int main() {
    std::cout << "Hello, World!" << std::endl;
    return 0;
}
"#;

/// `include/pch.hpp`, the C++ precompiled header.
pub const CPP_PCH: &str = "#ifndef PCH_HPP
#define PCH_HPP

#include <iostream>

#endif // PCH_HPP
";

/// `src/main.c` for C projects.
pub const C_MAIN: &str = r#"#include <stdio.h>

int main(void) {
    printf("Hello, World!\n");
    return 0;
}
"#;
