//! Theme templates

/// Light/dark/system theme context
pub const THEME_PROVIDER: &str = r#"import { createContext, useContext, useEffect, useState } from "react";
import type { ReactNode } from "react";

type Theme = "dark" | "light" | "system";

type ThemeProviderProps = {
  children: ReactNode;
  defaultTheme?: Theme;
  storageKey?: string;
};

type ThemeProviderState = {
  theme: Theme;
  setTheme: (theme: Theme) => void;
};

const ThemeProviderContext = createContext<ThemeProviderState>({
  theme: "system",
  setTheme: () => null,
});

export function ThemeProvider({
  children,
  defaultTheme = "system",
  storageKey = "vite-ui-theme",
}: ThemeProviderProps) {
  const [theme, setTheme] = useState<Theme>(
    () => (localStorage.getItem(storageKey) as Theme) || defaultTheme,
  );

  useEffect(() => {
    const root = window.document.documentElement;
    root.classList.remove("light", "dark");

    if (theme === "system") {
      const systemTheme = window.matchMedia("(prefers-color-scheme: dark)").matches ? "dark" : "light";
      root.classList.add(systemTheme);
      return;
    }

    root.classList.add(theme);
  }, [theme]);

  const value: ThemeProviderState = {
    theme,
    setTheme: (next: Theme) => {
      localStorage.setItem(storageKey, next);
      setTheme(next);
    },
  };

  return <ThemeProviderContext.Provider value={value}>{children}</ThemeProviderContext.Provider>;
}

export const useTheme = () => {
  const context = useContext(ThemeProviderContext);
  if (context === undefined) {
    throw new Error("useTheme must be used within a ThemeProvider");
  }
  return context;
};
"#;

/// Theme dropdown
pub const MODE_TOGGLE: &str = r#"import { Moon, Sun } from "lucide-react";
import { Button } from "@/components/ui/button";
import {
  DropdownMenu,
  DropdownMenuContent,
  DropdownMenuItem,
  DropdownMenuTrigger,
} from "@/components/ui/dropdown-menu";
import { useTheme } from "@/components/theme-provider";

export function ModeToggle() {
  const { setTheme } = useTheme();

  return (
    <DropdownMenu>
      <DropdownMenuTrigger asChild>
        <Button variant="outline" size="icon">
          <Sun className="h-[1.2rem] w-[1.2rem] scale-100 rotate-0 transition-all dark:scale-0 dark:-rotate-90" />
          <Moon className="absolute h-[1.2rem] w-[1.2rem] scale-0 rotate-90 transition-all dark:scale-100 dark:rotate-0" />
          <span className="sr-only">Toggle theme</span>
        </Button>
      </DropdownMenuTrigger>
      <DropdownMenuContent align="end">
        <DropdownMenuItem onClick={() => setTheme("light")}>Light</DropdownMenuItem>
        <DropdownMenuItem onClick={() => setTheme("dark")}>Dark</DropdownMenuItem>
        <DropdownMenuItem onClick={() => setTheme("system")}>System</DropdownMenuItem>
      </DropdownMenuContent>
    </DropdownMenu>
  );
}
"#;

/// Tailwind v4 entry with the shadcn color tokens
pub const INDEX_CSS: &str = r#"@import "tailwindcss";

@custom-variant dark (&:is(.dark *));

@theme inline {
  --radius-sm: calc(var(--radius) - 4px);
  --radius-md: calc(var(--radius) - 2px);
  --radius-lg: var(--radius);
  --radius-xl: calc(var(--radius) + 4px);
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --color-card: var(--card);
  --color-card-foreground: var(--card-foreground);
  --color-popover: var(--popover);
  --color-popover-foreground: var(--popover-foreground);
  --color-primary: var(--primary);
  --color-primary-foreground: var(--primary-foreground);
  --color-secondary: var(--secondary);
  --color-secondary-foreground: var(--secondary-foreground);
  --color-muted: var(--muted);
  --color-muted-foreground: var(--muted-foreground);
  --color-accent: var(--accent);
  --color-accent-foreground: var(--accent-foreground);
  --color-destructive: var(--destructive);
  --color-border: var(--border);
  --color-input: var(--input);
  --color-ring: var(--ring);
}

:root {
  --radius: 0.5rem;
  --background: oklch(0.982 0.006 255.51);
  --foreground: oklch(0.198 0.038 263.85);
  --card: oklch(1 0 0);
  --card-foreground: oklch(0.198 0.038 263.85);
  --popover: oklch(1 0 0);
  --popover-foreground: oklch(0.198 0.038 263.85);
  --primary: oklch(0.518 0.178 253.53);
  --primary-foreground: oklch(0.985 0 0);
  --secondary: oklch(0.968 0.007 247.9);
  --secondary-foreground: oklch(0.208 0.042 265.75);
  --muted: oklch(0.968 0.007 247.9);
  --muted-foreground: oklch(0.554 0.046 257.42);
  --accent: oklch(0.968 0.007 247.9);
  --accent-foreground: oklch(0.208 0.042 265.75);
  --destructive: oklch(0.577 0.245 27.33);
  --border: oklch(0.929 0.013 255.51);
  --input: oklch(0.929 0.013 255.51);
  --ring: oklch(0.518 0.178 253.53);
}

.dark {
  --background: oklch(0.145 0.02 264.7);
  --foreground: oklch(0.985 0 0);
  --card: oklch(0.205 0.025 264.7);
  --card-foreground: oklch(0.985 0 0);
  --popover: oklch(0.205 0.025 264.7);
  --popover-foreground: oklch(0.985 0 0);
  --primary: oklch(0.623 0.188 259.81);
  --primary-foreground: oklch(0.985 0 0);
  --secondary: oklch(0.269 0.03 264.7);
  --secondary-foreground: oklch(0.985 0 0);
  --muted: oklch(0.269 0.03 264.7);
  --muted-foreground: oklch(0.708 0.02 264.7);
  --accent: oklch(0.269 0.03 264.7);
  --accent-foreground: oklch(0.985 0 0);
  --destructive: oklch(0.704 0.191 22.22);
  --border: oklch(1 0 0 / 10%);
  --input: oklch(1 0 0 / 15%);
  --ring: oklch(0.623 0.188 259.81);
}

@layer base {
  * {
    @apply border-border outline-ring/50;
  }

  body {
    @apply bg-background text-foreground;
  }
}
"#;
