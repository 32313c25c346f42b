//! Names of the GLS commands emitted by the transformation core.

pub const CLASS_START: &str = "class start";
pub const CLASS_END: &str = "class end";
pub const INTERFACE_START: &str = "interface start";
pub const INTERFACE_END: &str = "interface end";
pub const INTERFACE_METHOD: &str = "interface method";
pub const MEMBER_VARIABLE: &str = "member variable";
pub const MEMBER_FUNCTION_DECLARE_START: &str = "member function declare start";
pub const MEMBER_FUNCTION_DECLARE_END: &str = "member function declare end";
pub const MEMBER_FUNCTION_CALL: &str = "member function call";
pub const CONSTRUCTOR_START: &str = "constructor start";
pub const CONSTRUCTOR_END: &str = "constructor end";
pub const FUNCTION_CALL: &str = "function call";

pub const STRING_INDEX_OF: &str = "string index of";
pub const STRING_SUBSTRING_LENGTH: &str = "string substring length";
pub const STRING_SUBSTRING_INDEX: &str = "string substring index";
pub const STRING_CASE_LOWER: &str = "string case lower";
pub const STRING_CASE_UPPER: &str = "string case upper";
pub const STRING_TRIM: &str = "string trim";

pub const LIST_TYPE: &str = "list type";
pub const DICTIONARY_TYPE: &str = "dictionary type";
pub const GENERIC_TYPE: &str = "generic type";
pub const UNION_TYPE: &str = "union type";

pub const OPERATION: &str = "operation";
pub const VARIABLE: &str = "variable";
pub const RETURN: &str = "return";

pub const IF_START: &str = "if start";
pub const ELSE_IF_START: &str = "else if start";
pub const ELSE_START: &str = "else start";
pub const IF_END: &str = "if end";
pub const FOR_NUMBERS_START: &str = "for numbers start";
pub const FOR_NUMBERS_END: &str = "for numbers end";

pub const COMMENT_LINE: &str = "comment line";
pub const COMMENT_BLOCK_START: &str = "comment block start";
pub const COMMENT_BLOCK: &str = "comment block";
pub const COMMENT_BLOCK_END: &str = "comment block end";
