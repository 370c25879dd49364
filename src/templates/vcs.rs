//! Version-control files written when a repository is initialized.

/// Paths of the version-control files, in the order they are added.
pub const FILES: [&str; 2] = [".gitignore", ".gitattributes"];

/// `.gitignore` for C and C++ build output and editor files.
pub const GITIGNORE: &str = "# Compiled object files
*.o
*.obj

# Precompiled headers
*.gch
*.pch

# Compiled dynamic libraries
*.so
*.dylib
*.dll

# Compiled static libraries
*.lib
*.a

# Executables
*.exe
*.out
*.app

# CMake build output
/build/
CMakeCache.txt
CMakeFiles/
cmake_install.cmake
Makefile

# Editors
.vscode/
.idea/
*.swp
*.swo
";

/// `.gitattributes` normalizing line endings.
pub const GITATTRIBUTES: &str = "# Normalize line endings
* text=auto

# C and C++ sources are text
*.c text
*.cpp text
*.h text
*.hpp text
";
